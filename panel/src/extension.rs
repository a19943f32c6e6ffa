//! Boilerplate the dapp generator injects when the vault extension is
//! installed: a navigation menu entry and a README section.
//!
//! The generator reads both from `*.args.mjs` modules placed next to the
//! templates they extend.
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Header template arguments, relative to the extension root.
pub const HEADER_ARGS_PATH: &str =
    "packages/nextjs/components/Header.tsx.args.mjs";
/// README template arguments, relative to the extension root.
pub const README_ARGS_PATH: &str = "packages/nextjs/app/README.md.args.mjs";

/// A navigation menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Visible label.
    pub label: &'static str,
    /// Route the entry links to.
    pub href: &'static str,
    /// Heroicons outline icon component.
    pub icon: &'static str,
}

/// Menu entry of the vault page.
pub const VAULT_MENU_ENTRY: MenuEntry =
    MenuEntry { label: "Vault", href: "/vault", icon: "BanknotesIcon" };

/// README section describing the extension.
pub const README_EXTRA_CONTENTS: &str = r"## 🚀 Setup ERC-4626 Vault Extension

This extension introduces an ERC-4626 vault contract and demonstrates how to interact with it, including deposit/redeem tokens.

The ERC-20 token contract is implemented using the [ERC-20 token implementation](https://github.com/OpenZeppelin/openzeppelin-contracts/blob/master/contracts/token/ERC20/ERC20.sol) from OpenZeppelin.

The ERC-4626 token contract is implemented using the [ERC-4626 token implementation](https://github.com/transmissions11/solmate/blob/main/src/tokens/ERC4626.sol) from solmate.

### Setup

Deploy your contract running ```yarn deploy```

### Interact with the token

Start the front-end with ```yarn start``` and go to the _/vault_ page to interact with your deployed ERC-4626 token.

You can check the code at ```packages/nextjs/app/vault/page.tsx```.

";

impl MenuEntry {
    /// Import statement for the entry's icon.
    #[must_use]
    pub fn icon_import(&self) -> String {
        format!(
            "import {{ {} }} from \"@heroicons/react/24/outline\";",
            self.icon
        )
    }

    /// The entry as a JSX object literal.
    #[must_use]
    pub fn object_literal(&self) -> String {
        format!(
            "{{\n  label: \"{}\",\n  href: \"{}\",\n  icon: <{} className=\"h-4 w-4\" />,\n}}",
            self.label, self.href, self.icon
        )
    }
}

/// Icon imports injected into the header template.
#[must_use]
pub fn menu_icon_imports() -> String {
    VAULT_MENU_ENTRY.icon_import()
}

/// Menu objects injected into the header template.
#[must_use]
pub fn menu_objects() -> String {
    VAULT_MENU_ENTRY.object_literal()
}

/// Body of the header arguments module.
#[must_use]
pub fn header_args_module() -> String {
    format!(
        "export const menuIconImports = `{}`;\nexport const menuObjects = `{}`;\n",
        escape_template(&menu_icon_imports()),
        escape_template(&menu_objects()),
    )
}

/// Body of the README arguments module.
#[must_use]
pub fn readme_args_module() -> String {
    format!(
        "export const extraContents = `{}`;\n",
        escape_template(README_EXTRA_CONTENTS)
    )
}

/// Writes both arguments modules under the extension root `dir`, creating
/// directories as needed, and returns the written paths.
///
/// # Errors
///
/// If a directory or file cannot be written.
pub fn write_args_files(
    dir: impl AsRef<Path>,
) -> std::io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let files = [
        (HEADER_ARGS_PATH, header_args_module()),
        (README_ARGS_PATH, readme_args_module()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (relative, contents) in files {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Escapes text for a JavaScript template literal.
fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}
