/// Extension trait to recognize errors caused by a reverted transaction.
pub trait RevertExt {
    /// Checks that `Self` is the node rejecting a transaction because its
    /// execution reverted, e.g. during gas estimation.
    fn reverted(&self) -> bool;
}

impl RevertExt for alloy::contract::Error {
    fn reverted(&self) -> bool {
        let Self::TransportError(e) = self else {
            return false;
        };

        //  ErrorResp(
        //      ErrorPayload {
        //          code: 3,
        //          message: "execution reverted: ...",
        //          data: Some(RawValue("0x...")),
        //      },
        //  )
        e.as_error_resp()
            .is_some_and(|payload| payload.message.contains("revert"))
    }
}
