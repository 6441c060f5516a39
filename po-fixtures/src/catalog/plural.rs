//! Plural-form selection rule advertised in the catalog header.

/// A three-category plural rule (East Slavic style).
///
/// Category 0 covers counts ending in 1 except 11, category 1 covers counts
/// ending in 2-4 except 12-14, and category 2 covers everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PluralRule;

impl PluralRule {
    /// Number of plural categories.
    pub const NPLURALS: usize = 3;

    /// C expression evaluated by gettext runtimes for this rule.
    pub const EXPRESSION: &'static str =
        "(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2)";

    /// Value of the `Plural-Forms` header field.
    ///
    /// # Examples
    ///
    /// ```
    /// use po_fixtures::catalog::PluralRule;
    ///
    /// assert!(PluralRule.header_value().starts_with("nplurals=3; plural=(n%10==1"));
    /// ```
    #[must_use]
    pub fn header_value(self) -> String {
        format!("nplurals={}; plural={};", Self::NPLURALS, Self::EXPRESSION)
    }

    /// Selects the plural category for `count`.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "plural rules are defined in terms of remainders"
    )]
    pub const fn category(self, count: u64) -> usize {
        let last = count % 10;
        let last_two = count % 100;
        if last == 1 && last_two != 11 {
            0
        } else if last >= 2 && last <= 4 && (last_two < 10 || last_two >= 20) {
            1
        } else {
            2
        }
    }
}
