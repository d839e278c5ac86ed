//! Function template registry and structural recognition.
//!
//! A template is a fixed bracketed construct (`\sin{...}`,
//! `\frac{...}{...}`, `^{...}`) whose slots must be entered, navigated
//! and deleted as a whole. The registry is fixed at compile time; one
//! generic matcher serves every template instead of a scan routine per
//! function name.

use super::braces::{span_ending_at, top_level_pair_count};
use super::buffer::InputBuffer;

/// Descriptor for one bracketed construct.
///
/// `token` is the literal opening sequence *including* the first `{`
/// (for `log` the subscript brace: `\log_{`). One-slot templates close
/// with `}`; two-slot templates continue `}{` into a second slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionTemplate {
    pub name: &'static str,
    pub token: &'static str,
    pub slots: u8,
    /// Whether insertion of this template is gated by the nesting cap.
    pub nesting_limited: bool,
}

impl FunctionTemplate {
    /// Token length in characters.
    pub fn token_len(&self) -> usize {
        self.token.chars().count()
    }

    /// The empty unit spliced in on insertion, e.g. `\frac{}{}`.
    pub fn skeleton(&self) -> String {
        match self.slots {
            2 => format!("{}}}{{}}", self.token),
            _ => format!("{}}}", self.token),
        }
    }

    /// Whether the token's brace opens a subscript (`\log_{`). The
    /// slot after the subscript is the unit's value slot; navigation
    /// hops the subscript span as part of the token.
    pub fn has_subscript(&self) -> bool {
        self.token.ends_with("_{")
    }
}

/// Maximum nesting of cap-gated templates (fractions, exponents).
pub const MAX_NESTING_DEPTH: usize = 3;

/// The exponent shorthand `^{...}`, with no leading backslash.
pub const EXPONENT: FunctionTemplate = FunctionTemplate {
    name: "exponent",
    token: "^{",
    slots: 1,
    nesting_limited: true,
};

/// Every recognized template, exponent included.
pub const TEMPLATES: [FunctionTemplate; 7] = [
    FunctionTemplate {
        name: "sin",
        token: "\\sin{",
        slots: 1,
        nesting_limited: false,
    },
    FunctionTemplate {
        name: "cos",
        token: "\\cos{",
        slots: 1,
        nesting_limited: false,
    },
    FunctionTemplate {
        name: "tan",
        token: "\\tan{",
        slots: 1,
        nesting_limited: false,
    },
    FunctionTemplate {
        name: "sqrt",
        token: "\\sqrt{",
        slots: 1,
        nesting_limited: false,
    },
    FunctionTemplate {
        name: "frac",
        token: "\\frac{",
        slots: 2,
        nesting_limited: true,
    },
    FunctionTemplate {
        name: "log",
        token: "\\log_{",
        slots: 2,
        nesting_limited: false,
    },
    EXPONENT,
];

/// Look up a template by name.
pub fn template_named(name: &str) -> Option<&'static FunctionTemplate> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// The template whose token starts at `start`, if any.
pub fn template_starting_at(buffer: &InputBuffer, start: usize) -> Option<&'static FunctionTemplate> {
    TEMPLATES
        .iter()
        .find(|t| buffer.token_ends_at(start + t.token_len() - 1, t.token))
}

/// A recognized template unit occupying `start..end` in the buffer.
///
/// `start` is the index of the token's first character; `end` is the
/// gap position just past the final closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch {
    pub template: &'static FunctionTemplate,
    pub start: usize,
    pub end: usize,
}

impl UnitMatch {
    /// Character length of the whole unit.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Match `template` as a complete unit ending at gap position `end`.
///
/// The character just before `end` must be `}`, its span must resolve,
/// and the token must sit immediately before the (first) slot's opening
/// brace, with no gap or stray characters. Two-slot templates chain the
/// same check across both slots and additionally require exactly two
/// top-level brace pairs in the body; any other count is malformed.
pub fn match_template(
    buffer: &InputBuffer,
    end: usize,
    template: &'static FunctionTemplate,
) -> Option<UnitMatch> {
    if end == 0 {
        return None;
    }
    let last_slot = span_ending_at(buffer, end - 1)?;

    let first_open = if template.slots == 2 {
        if last_slot.open == 0 || buffer.char_at(last_slot.open - 1) != Some('}') {
            return None;
        }
        let first_slot = span_ending_at(buffer, last_slot.open - 1)?;
        first_slot.open
    } else {
        last_slot.open
    };

    // The token's trailing '{' is the first slot's opening brace.
    if !buffer.token_ends_at(first_open, template.token) {
        return None;
    }

    if template.slots == 2 && top_level_pair_count(buffer, first_open, end) != Some(2) {
        return None;
    }

    let start = first_open + 1 - template.token_len();
    Some(UnitMatch {
        template,
        start,
        end,
    })
}

/// The complete unit of *any* registered template ending at `end`.
pub fn complete_unit_ending_at(buffer: &InputBuffer, end: usize) -> Option<UnitMatch> {
    TEMPLATES
        .iter()
        .find_map(|t| match_template(buffer, end, t))
}

/// The still-empty unit whose first slot holds the cursor gap `cursor`.
///
/// True when the cursor sits exactly between `{` and `}` of a slot whose
/// opening brace terminates a template token, i.e. the state right after
/// insertion. For two-slot templates the whole skeleton must be empty.
/// Anchors atomic deletion of a just-inserted unit.
pub fn empty_unit_at(buffer: &InputBuffer, cursor: usize) -> Option<UnitMatch> {
    if cursor == 0
        || buffer.char_at(cursor - 1) != Some('{')
        || buffer.char_at(cursor) != Some('}')
    {
        return None;
    }
    let template = TEMPLATES
        .iter()
        .find(|t| buffer.token_ends_at(cursor - 1, t.token))?;

    let end = if template.slots == 2 {
        // The second slot must also be present and empty.
        if buffer.char_at(cursor + 1) != Some('{') || buffer.char_at(cursor + 2) != Some('}') {
            return None;
        }
        cursor + 3
    } else {
        cursor + 1
    };
    let start = cursor - template.token_len();
    Some(UnitMatch {
        template,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(text: &str) -> InputBuffer {
        InputBuffer::from_text(text)
    }

    #[test]
    fn test_skeletons() {
        assert_eq!(template_named("sin").unwrap().skeleton(), "\\sin{}");
        assert_eq!(template_named("frac").unwrap().skeleton(), "\\frac{}{}");
        assert_eq!(template_named("log").unwrap().skeleton(), "\\log_{}{}");
        assert_eq!(EXPONENT.skeleton(), "^{}");
    }

    #[test]
    fn test_complete_one_slot() {
        let b = buf("\\sin{x}");
        let m = complete_unit_ending_at(&b, 7).unwrap();
        assert_eq!(m.template.name, "sin");
        assert_eq!((m.start, m.end), (0, 7));
    }

    #[test]
    fn test_complete_one_slot_mid_expression() {
        let b = buf("1 + \\cos{2x} - 3");
        let m = complete_unit_ending_at(&b, 12).unwrap();
        assert_eq!(m.template.name, "cos");
        assert_eq!((m.start, m.end), (4, 12));
    }

    #[test]
    fn test_complete_two_slot_frac() {
        //           0         1
        //           01234567890
        let b = buf("\\frac{a}{b}");
        let m = complete_unit_ending_at(&b, 11).unwrap();
        assert_eq!(m.template.name, "frac");
        assert_eq!((m.start, m.end), (0, 11));
    }

    #[test]
    fn test_complete_two_slot_log() {
        let b = buf("\\log_{10}{x}");
        let m = complete_unit_ending_at(&b, 12).unwrap();
        assert_eq!(m.template.name, "log");
        assert_eq!((m.start, m.end), (0, 12));
    }

    #[test]
    fn test_complete_exponent() {
        let b = buf("x^{2}");
        let m = complete_unit_ending_at(&b, 5).unwrap();
        assert_eq!(m.template.name, "exponent");
        assert_eq!((m.start, m.end), (1, 5));
    }

    #[test]
    fn test_nested_template_in_slot_is_still_complete() {
        let b = buf("\\frac{\\sin{x}}{2}");
        let m = complete_unit_ending_at(&b, b.len()).unwrap();
        assert_eq!(m.template.name, "frac");
        assert_eq!((m.start, m.end), (0, b.len()));
    }

    #[test]
    fn test_gap_between_slots_rejected() {
        // stray character between the two frac slots
        let b = buf("\\frac{a}x{b}");
        assert!(complete_unit_ending_at(&b, b.len()).is_none());
    }

    #[test]
    fn test_stray_prefix_rejected() {
        // token does not immediately precede the opening brace
        let b = buf("\\sin {x}");
        assert!(complete_unit_ending_at(&b, 8).is_none());
    }

    #[test]
    fn test_incomplete_is_not_matched() {
        let b = buf("\\sin{x");
        assert!(complete_unit_ending_at(&b, 6).is_none());
        let b = buf("\\frac{a}{b");
        assert!(complete_unit_ending_at(&b, 10).is_none());
    }

    #[test]
    fn test_plain_braces_are_not_a_template() {
        let b = buf("{x}");
        assert!(complete_unit_ending_at(&b, 3).is_none());
    }

    #[test]
    fn test_empty_unit_one_slot() {
        let b = buf("\\sin{}");
        let m = empty_unit_at(&b, 5).unwrap();
        assert_eq!(m.template.name, "sin");
        assert_eq!((m.start, m.end), (0, 6));
    }

    #[test]
    fn test_empty_unit_two_slot() {
        //           0123456789
        let b = buf("\\frac{}{}");
        let m = empty_unit_at(&b, 6).unwrap();
        assert_eq!(m.template.name, "frac");
        assert_eq!((m.start, m.end), (0, 9));
    }

    #[test]
    fn test_empty_unit_exponent() {
        let b = buf("x^{}");
        let m = empty_unit_at(&b, 3).unwrap();
        assert_eq!(m.template.name, "exponent");
        assert_eq!((m.start, m.end), (1, 4));
    }

    #[test]
    fn test_populated_slot_is_not_an_empty_unit() {
        let b = buf("\\sin{x}");
        assert!(empty_unit_at(&b, 5).is_none());
    }

    #[test]
    fn test_second_slot_of_empty_frac_is_not_an_anchor() {
        // cursor inside the denominator of \frac{}{}: the slot before
        // it is not preceded by a token, so nothing anchors here
        let b = buf("\\frac{}{}");
        assert!(empty_unit_at(&b, 8).is_none());
    }

    #[test]
    fn test_half_filled_frac_is_not_an_empty_unit() {
        // \frac{}{x} with cursor in the first slot: the unit is no
        // longer fully empty, deletion must not swallow the content
        let b = buf("\\frac{}{x}");
        assert!(empty_unit_at(&b, 6).is_none());
    }

    #[test]
    fn test_template_starting_at() {
        let b = buf("1+\\sqrt{x}");
        assert_eq!(template_starting_at(&b, 2).unwrap().name, "sqrt");
        assert!(template_starting_at(&b, 0).is_none());
    }
}
