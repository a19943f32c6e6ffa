//! Procedural macros for end-to-end tests.
use proc_macro::TokenStream;


/// Defines an end-to-end test that provides test accounts' injection from
/// arguments.
///
/// Every argument must be of type `Account`; each one is created and funded
/// before the body runs. The test runs on the `tokio` runtime.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn mints(alice: Account) -> eyre::Result<()> {
///     let mut panel = VaultPanel::new(client_for(&alice)?, Unit::ETHER);
///     panel.mint().await?;
///     assert!(panel.balances().token.is_some());
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr, input)
}
