use anyhow::ensure;
use std::ffi::{OsStr, OsString};

pub const DEFAULT_TARGET: &str = "vscode";
pub const DEFAULT_REPLACEMENT: &str = "zycode";

/// A literal substring substitution applied to entry names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenameRule {
    target: String,
    replacement: String,
}

impl RenameRule {
    /// Returns an error if `target` is empty.
    pub fn new(target: impl Into<String>, replacement: impl Into<String>) -> anyhow::Result<Self> {
        let target = target.into();
        ensure!(!target.is_empty(), "target substring must not be empty");

        Ok(Self {
            target,
            replacement: replacement.into(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The new name for `name`, with every occurrence of the target replaced.
    /// `None` when there is nothing to rename.
    pub fn apply(&self, name: &str) -> Option<String> {
        if !name.contains(&self.target) {
            return None;
        }

        let renamed = name.replace(&self.target, &self.replacement);
        (renamed != name).then_some(renamed)
    }

    /// Same as [`RenameRule::apply`] for a raw entry name. Names that are not
    /// valid UTF-8 are matched on their underlying bytes on Unix and on UTF-16
    /// units on Windows.
    pub fn apply_os(&self, name: &OsStr) -> Option<OsString> {
        if let Some(name) = name.to_str() {
            return self.apply(name).map(OsString::from);
        }
        self.apply_raw(name)
    }

    #[cfg(unix)]
    fn apply_raw(&self, name: &OsStr) -> Option<OsString> {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        replace_all(
            name.as_bytes(),
            self.target.as_bytes(),
            self.replacement.as_bytes(),
        )
        .map(OsString::from_vec)
    }

    #[cfg(windows)]
    fn apply_raw(&self, name: &OsStr) -> Option<OsString> {
        use std::os::windows::ffi::{OsStrExt, OsStringExt};

        let name: Vec<u16> = name.encode_wide().collect();
        let target: Vec<u16> = self.target.encode_utf16().collect();
        let replacement: Vec<u16> = self.replacement.encode_utf16().collect();
        replace_all(&name, &target, &replacement).map(|wide| OsString::from_wide(&wide))
    }

    #[cfg(not(any(unix, windows)))]
    fn apply_raw(&self, _name: &OsStr) -> Option<OsString> {
        None
    }
}

/// Replaces every non-overlapping `needle` in `haystack`, left to right.
/// `None` when `needle` does not occur.
#[cfg_attr(not(any(unix, windows)), allow(dead_code))]
fn replace_all<T: Copy + PartialEq>(
    haystack: &[T],
    needle: &[T],
    replacement: &[T],
) -> Option<Vec<T>> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut found = false;
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            out.extend_from_slice(replacement);
            i += needle.len();
            found = true;
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }

    (found && out != haystack).then_some(out)
}

impl Default for RenameRule {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
            replacement: DEFAULT_REPLACEMENT.to_owned(),
        }
    }
}
