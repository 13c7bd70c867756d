use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

/// Joins `parent` and `name` with a single `/`, byte for byte.
///
/// Nothing is normalized: a parent of `a/` gives `a//name`.
pub fn join(parent: &OsStr, name: &OsStr) -> OsString {
    let mut v = Vec::with_capacity(parent.len() + 1 + name.len());
    v.extend_from_slice(parent.as_bytes());
    v.push(b'/');
    v.extend_from_slice(name.as_bytes());
    OsString::from_vec(v)
}

pub fn is_dot_or_dotdot(name: &OsStr) -> bool {
    let bytes = name.as_bytes();
    bytes == b"." || bytes == b".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_prefix_verbatim() {
        assert_eq!(join(OsStr::new("root"), OsStr::new("a.txt")), "root/a.txt");
        assert_eq!(join(OsStr::new("root/"), OsStr::new("a")), "root//a");
        assert_eq!(join(OsStr::new("./x"), OsStr::new("..a")), "./x/..a");
    }

    #[test]
    fn join_non_utf8() {
        let name = OsStr::from_bytes(b"\xff\xfe");
        let joined = join(OsStr::new("d"), name);
        assert_eq!(joined.as_bytes(), b"d/\xff\xfe");
    }

    #[test]
    fn dot_entries() {
        assert!(is_dot_or_dotdot(OsStr::new(".")));
        assert!(is_dot_or_dotdot(OsStr::new("..")));
        assert!(!is_dot_or_dotdot(OsStr::new("...")));
        assert!(!is_dot_or_dotdot(OsStr::new(".hidden")));
        assert!(!is_dot_or_dotdot(OsStr::new("")));
    }
}
