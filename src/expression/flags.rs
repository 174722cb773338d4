bitflags::bitflags! {
    /// Engine-level match modifiers carried by an expression.
    ///
    /// Flags propagate by union through every combinator and apply to the whole
    /// compiled pattern, rendered as a leading inline group (`(?im:...)`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const IGNORE_CASE = 1 << 0;
        const MULTILINE   = 1 << 1;
    }
}

impl Flags {
    /// Inline flag letters understood by the `regex` crate, e.g. `"im"`.
    pub fn inline(self) -> String {
        let mut out = String::new();
        if self.contains(Flags::IGNORE_CASE) {
            out.push('i');
        }
        if self.contains(Flags::MULTILINE) {
            out.push('m');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_letters_follow_flag_bits() {
        assert_eq!(Flags::empty().inline(), "");
        assert_eq!(Flags::IGNORE_CASE.inline(), "i");
        assert_eq!(Flags::MULTILINE.inline(), "m");
        assert_eq!((Flags::MULTILINE | Flags::IGNORE_CASE).inline(), "im");
    }
}
