//! Layout expressions for sizing and positioning widgets.
//!
//! A [`Layout`] describes a single measurement as a sum of [`Term`]s. Each
//! term is a constant offset, a percentage of the parent's extent, or both:
//!
//! ```rust
//! use relayout::Layout;
//!
//! let mut width: Layout = "50% - 10".parse().unwrap();
//! assert_eq!(width.value(), -10.);
//!
//! width.update_parent_size(300.);
//! assert_eq!(width.value(), 140.);
//! assert_eq!(width.to_string(), "50% - 10");
//! ```
//!
//! A layout's value is only refreshed when
//! [`update_parent_size()`](Layout::update_parent_size) is called. Whoever
//! owns the parent extent is responsible for pushing every change down to the
//! layouts that depend on it. [`Container`](crate::Container) does this for
//! its children.

use std::error::Error;
use std::fmt::{self, Display, Write};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use figures::{Point, Size};

/// A single additive component of a [`Layout`].
///
/// Terms evaluate to `percentage / 100 * extent + offset`, where `extent` is
/// the parent's width or height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    percentage: f32,
    offset: f32,
}

impl Term {
    /// Returns a term that always evaluates to `offset`.
    #[must_use]
    pub const fn constant(offset: f32) -> Self {
        Self {
            percentage: 0.,
            offset,
        }
    }

    /// Returns a term that evaluates to `percentage` percent of the parent's
    /// extent plus `offset`.
    ///
    /// `percentage` uses the 0-100 scale: `Term::percent(60., 0.)` is `60%`.
    #[must_use]
    pub const fn percent(percentage: f32, offset: f32) -> Self {
        Self { percentage, offset }
    }

    /// Returns a term that evaluates to `ratio` times the parent's extent plus
    /// `offset`.
    ///
    /// `ratio` uses the 0-1 scale: `Term::relative(0.35, -10.)` is
    /// `35% - 10`.
    #[must_use]
    pub fn relative(ratio: f32, offset: f32) -> Self {
        Self::percent(ratio * 100., offset)
    }

    /// Returns the percentage of the parent's extent this term contributes.
    #[must_use]
    pub const fn percentage(&self) -> f32 {
        self.percentage
    }

    /// Returns the constant this term contributes.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns true if this term depends on the parent's extent.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.percentage != 0.
    }

    /// Evaluates this term against `extent`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn evaluate(&self, extent: f32) -> f32 {
        self.evaluate_wide(f64::from(extent)) as f32
    }

    fn evaluate_wide(&self, extent: f64) -> f64 {
        f64::from(self.percentage) * extent / 100. + f64::from(self.offset)
    }

    fn negated(self) -> Self {
        Self {
            percentage: -self.percentage,
            offset: -self.offset,
        }
    }

    fn scaled(self, factor: f32) -> Self {
        Self {
            percentage: self.percentage * factor,
            offset: self.offset * factor,
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, self.percentage, self.offset)
    }
}

fn write_canonical(f: &mut fmt::Formatter<'_>, percentage: f32, offset: f32) -> fmt::Result {
    // `-0.0` must not print as "-0".
    let offset = if offset == 0. { 0. } else { offset };
    match (percentage == 0., offset == 0.) {
        (true, true) => f.write_char('0'),
        (true, false) => write!(f, "{offset}"),
        (false, true) => write!(f, "{percentage}%"),
        (false, false) if offset > 0. => write!(f, "{percentage}% + {offset}"),
        (false, false) => write!(f, "{percentage}% - {}", -offset),
    }
}

/// A one-dimensional measurement expressed as a sum of [`Term`]s.
///
/// Layouts are created from numbers, from terms, or by parsing an expression
/// such as `"10 - 5% - 60 + 25.5%"`. Expressions are sequences of numbers,
/// each optionally suffixed with `%`, joined by `+` or `-`. Whitespace around
/// operators and before `%` is ignored, and numbers may carry their own sign
/// (`"150 + -20%"`).
///
/// The terms are kept in the order they were written. Evaluation sums every
/// term, while [`Display`] collapses them into at most one percentage and one
/// constant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    terms: Vec<Term>,
    value: f32,
}

impl Layout {
    /// Returns a layout with no terms, which always evaluates to 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            terms: Vec::new(),
            value: 0.,
        }
    }

    /// Returns a layout that always evaluates to `value`.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::from(Term::constant(value))
    }

    /// Parses `expression` into a layout.
    ///
    /// An empty expression produces the same layout as [`Layout::new()`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTerm`] if any term is not a finite decimal
    /// number optionally followed by `%`, and [`ParseError::Overflow`] if the
    /// combined percentage or constant does not fit in an `f32`.
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        let mut terms = Vec::new();
        let mut token = String::new();
        let mut negative = false;
        for ch in expression.chars() {
            match ch {
                // Whitespace inside a term is kept so that `10 20` is rejected.
                ch if ch.is_whitespace() => {
                    if !token.is_empty() {
                        token.push(ch);
                    }
                }
                // A sign before a number rather than an operator between two.
                '+' | '-' if token.is_empty() => {
                    if ch == '-' {
                        negative = !negative;
                    }
                }
                '+' | '-' => {
                    terms.push(parse_term(expression, token.trim_end(), negative)?);
                    token.clear();
                    negative = ch == '-';
                }
                _ => token.push(ch),
            }
        }
        if !token.is_empty() {
            terms.push(parse_term(expression, token.trim_end(), negative)?);
        }

        let layout = Self::from_terms(terms);
        if layout.percentage().is_finite() && layout.offset().is_finite() {
            Ok(layout)
        } else {
            tracing::debug!("layout expression {expression:?} overflows");
            Err(ParseError::Overflow)
        }
    }

    fn from_terms(terms: Vec<Term>) -> Self {
        let value = evaluate(&terms, 0.);
        Self { terms, value }
    }

    /// Returns the terms this layout sums, in the order they were written.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the combined percentage of all terms.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percentage(&self) -> f32 {
        sum(self.terms.iter().map(|term| f64::from(term.percentage))) as f32
    }

    /// Returns the combined constant of all terms.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn offset(&self) -> f32 {
        sum(self.terms.iter().map(|term| f64::from(term.offset))) as f32
    }

    /// Returns true if this layout's value does not depend on its parent.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        !self.terms.iter().any(Term::is_relative)
    }

    /// Re-evaluates this layout against the parent's new `extent`.
    ///
    /// Calling this repeatedly with the same extent always produces the same
    /// value.
    pub fn update_parent_size(&mut self, extent: f32) {
        self.value = evaluate(&self.terms, extent);
    }

    /// Returns the value computed by the last call to
    /// [`update_parent_size()`](Self::update_parent_size).
    ///
    /// Before the first update, relative terms contribute nothing and only the
    /// constant portion of this layout is returned.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }
}

#[allow(clippy::cast_possible_truncation)]
fn evaluate(terms: &[Term], extent: f32) -> f32 {
    let extent = f64::from(extent);
    sum(terms.iter().map(|term| term.evaluate_wide(extent))) as f32
}

// `Iterator::sum` starts from `-0.0`, which would make empty layouts negative.
fn sum(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0., |sum, value| sum + value)
}

fn parse_term(expression: &str, token: &str, negative: bool) -> Result<Term, ParseError> {
    let (number, relative) = match token.strip_suffix('%') {
        Some(number) => (number.trim_end(), true),
        None => (token, false),
    };

    let value = if is_decimal(number) {
        number.parse::<f32>().ok().filter(|value| value.is_finite())
    } else {
        None
    };
    let Some(mut value) = value else {
        tracing::debug!("invalid term {token:?} in layout expression {expression:?}");
        return Err(ParseError::InvalidTerm(token.to_string()));
    };

    if negative {
        value = -value;
    }
    Ok(if relative {
        Term::percent(value, 0.)
    } else {
        Term::constant(value)
    })
}

fn is_decimal(number: &str) -> bool {
    let mut digits = 0_usize;
    let mut points = 0_usize;
    for ch in number.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, self.percentage(), self.offset())
    }
}

impl FromStr for Layout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Layout {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Term> for Layout {
    fn from(term: Term) -> Self {
        Self::from_terms(vec![term])
    }
}

impl From<f32> for Layout {
    fn from(value: f32) -> Self {
        Self::constant(value)
    }
}

impl From<i32> for Layout {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i32) -> Self {
        Self::constant(value as f32)
    }
}

impl Add for Layout {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.terms.extend(rhs.terms);
        Self::from_terms(self.terms)
    }
}

impl Sub for Layout {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Layout {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_terms(self.terms.into_iter().map(Term::negated).collect())
    }
}

impl Mul<f32> for Layout {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_terms(self.terms.into_iter().map(|term| term.scaled(rhs)).collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Layout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let expression = String::deserialize(deserializer)?;
        Self::parse(&expression).map_err(serde::de::Error::custom)
    }
}

/// A pair of independent [`Layout`]s for the horizontal and vertical axes.
///
/// Displays as `"(x, y)"`, which [`FromStr`] accepts back.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout2d {
    /// The horizontal layout, evaluated against the parent's width.
    pub x: Layout,
    /// The vertical layout, evaluated against the parent's height.
    pub y: Layout,
}

impl Layout2d {
    /// Returns a new layout from its two axes.
    #[must_use]
    pub fn new(x: impl Into<Layout>, y: impl Into<Layout>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Parses an expression for each axis.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered in either expression.
    pub fn parse(x: &str, y: &str) -> Result<Self, ParseError> {
        Ok(Self::new(Layout::parse(x)?, Layout::parse(y)?))
    }

    /// Re-evaluates `x` against the parent's width and `y` against the
    /// parent's height.
    pub fn update_parent_size(&mut self, parent: Size<f32>) {
        self.x.update_parent_size(parent.width);
        self.y.update_parent_size(parent.height);
    }

    /// Returns the current value of both axes.
    #[must_use]
    pub fn value(&self) -> Point<f32> {
        Point::new(self.x.value(), self.y.value())
    }
}

impl<X, Y> From<(X, Y)> for Layout2d
where
    X: Into<Layout>,
    Y: Into<Layout>,
{
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Layout2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Layout2d {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or(ParseError::UnbalancedParenthesis)?,
            None if trimmed.ends_with(')') => return Err(ParseError::UnbalancedParenthesis),
            None => trimmed,
        };
        let (x, y) = inner.split_once(',').ok_or(ParseError::MissingComponent)?;
        Self::parse(x, y)
    }
}

/// An error parsing a [`Layout`] or [`Layout2d`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A term was not a decimal number optionally followed by `%`.
    InvalidTerm(String),
    /// A two-dimensional layout did not contain a `,` separating its axes.
    MissingComponent,
    /// A two-dimensional layout had an opening or closing parenthesis without
    /// its counterpart.
    UnbalancedParenthesis,
    /// The combined percentage or constant of a layout is too large to be
    /// represented.
    Overflow,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidTerm(term) => write!(f, "invalid layout term `{term}`"),
            ParseError::MissingComponent => f.write_str("expected two layouts separated by `,`"),
            ParseError::UnbalancedParenthesis => f.write_str("unbalanced parenthesis"),
            ParseError::Overflow => f.write_str("layout is too large to be represented"),
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use figures::{Point, Size};
    use rand::Rng;

    use super::{Layout, Layout2d, ParseError, Term};

    fn assert_close(actual: f32, expected: f32) {
        let tolerance = expected.abs().max(1.) * 1e-5;
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn constants() {
        let mut empty = Layout::new();
        assert_eq!(empty.to_string(), "0");
        empty.update_parent_size(110.);
        assert_eq!(empty.value(), 0.);

        let mut negative = Layout::from(-20.3_f32);
        assert_eq!(negative.to_string(), "-20.3");
        assert_eq!(negative.value(), -20.3);
        negative.update_parent_size(120.);
        assert_eq!(negative.value(), -20.3);

        let mut parsed = Layout::parse("60").unwrap();
        assert_eq!(parsed.to_string(), "60");
        parsed.update_parent_size(130.);
        assert_eq!(parsed.value(), 60.);
        assert!(parsed.is_constant());
    }

    #[test]
    fn constants_2d() {
        let mut origin = Layout2d::default();
        assert_eq!(origin.to_string(), "(0, 0)");
        origin.update_parent_size(Size::new(141., 142.));
        assert_eq!(origin.value(), Point::new(0., 0.));

        let mut mixed = Layout2d::new(10_f32, "-50".parse::<Layout>().unwrap());
        assert_eq!(mixed.to_string(), "(10, -50)");
        mixed.update_parent_size(Size::new(153., 154.));
        assert_eq!(mixed.value(), Point::new(10., -50.));
    }

    #[test]
    fn percentage() {
        let mut layout = Layout::parse("60%").unwrap();
        assert_eq!(layout.to_string(), "60%");
        assert!(!layout.is_constant());
        assert_eq!(layout.value(), 0.);

        layout.update_parent_size(250.);
        assert_eq!(layout.value(), 150.);
        layout.update_parent_size(100.);
        assert_eq!(layout.value(), 60.);
        assert_eq!(layout.to_string(), "60%");
    }

    #[test]
    fn percentages_2d() {
        let mut both = Layout2d::parse("40%", "5%").unwrap();
        assert_eq!(both.to_string(), "(40%, 5%)");
        both.update_parent_size(Size::new(150., 120.));
        assert_eq!(both.x.value(), 150. * 0.4);
        assert_eq!(both.y.value(), 120. * 0.05);
        assert_eq!(both.to_string(), "(40%, 5%)");

        let mut mixed = Layout2d::new(40, Layout::parse("25.3%").unwrap());
        assert_eq!(mixed.to_string(), "(40, 25.3%)");
        mixed.update_parent_size(Size::new(300., 506.));
        assert_eq!(mixed.x.value(), 40.);
        assert_eq!(mixed.y.value(), 506. * 0.253);
        assert_eq!(mixed.to_string(), "(40, 25.3%)");
    }

    #[test]
    fn relative_terms() {
        let mut ratio = Layout::from(Term::relative(0.35, 0.));
        assert_eq!(ratio.to_string(), "35%");
        ratio.update_parent_size(40.);
        assert_eq!(ratio.value(), 14.);

        let mut with_offset = Layout::from(Term::relative(0.35, -10.));
        assert_eq!(with_offset.to_string(), "35% - 10");
        assert_eq!(with_offset.value(), -10.);
        with_offset.update_parent_size(40.);
        assert_eq!(with_offset.value(), 4.);
        assert_eq!(with_offset.to_string(), "35% - 10");

        assert_eq!(Term::percent(12.5, 3.).to_string(), "12.5% + 3");
        assert_eq!(Term::constant(-4.).to_string(), "-4");
    }

    #[test]
    fn calculations() {
        let empty = Layout::parse("").unwrap();
        assert_eq!(empty.value(), 0.);
        assert!(empty.terms().is_empty());
        assert_eq!(empty, Layout::new());

        let mixed = Layout::parse("10 - 5% - 60 + 25.5% + 20 - 15").unwrap();
        assert_eq!(mixed.to_string(), "20.5% - 45");
        assert_eq!(mixed.terms().len(), 6);
        assert_eq!(mixed.value(), -45.);

        let signed = Layout::parse("+10.5 + 150 + -20%").unwrap();
        assert_eq!(signed.to_string(), "-20% + 160.5");
        assert_eq!(signed.percentage(), -20.);
        assert_eq!(signed.offset(), 160.5);
    }

    #[test]
    fn term_order_does_not_change_value() {
        let mut forward = Layout::parse("10 - 5% - 60 + 25.5% + 20 - 15").unwrap();
        let mut reversed = Layout::parse("-15 + 20 + 25.5% - 60 - 5% + 10").unwrap();
        let mut collapsed = Layout::parse(&forward.to_string()).unwrap();
        for extent in [0., 1., 200., 1234.5] {
            forward.update_parent_size(extent);
            reversed.update_parent_size(extent);
            collapsed.update_parent_size(extent);
            assert_close(forward.value(), extent * 0.205 - 45.);
            assert_close(reversed.value(), forward.value());
            assert_close(collapsed.value(), forward.value());
        }
    }

    #[test]
    fn whitespace_and_signs() {
        assert_eq!(Layout::parse("  10 %  ").unwrap().to_string(), "10%");
        assert_eq!(Layout::parse("- 5 +\t2").unwrap().to_string(), "-3");
        assert_eq!(Layout::parse("5 - -5").unwrap().to_string(), "10");
        assert_eq!(Layout::parse("--5").unwrap().to_string(), "5");
        assert_eq!(Layout::parse("-.5%+5.").unwrap().to_string(), "-0.5% + 5");
        assert_eq!(Layout::parse("10 +").unwrap().to_string(), "10");
        assert_eq!(Layout::parse("50% - 50%").unwrap().to_string(), "0");
    }

    #[test]
    fn invalid_terms() {
        for (expression, token) in [
            ("abc", "abc"),
            ("10 + px", "px"),
            ("%", "%"),
            ("5%%", "5%%"),
            ("1.2.3", "1.2.3"),
            ("inf", "inf"),
            ("NaN", "NaN"),
            ("1e5", "1e5"),
            ("20% * 2", "20% * 2"),
            ("10 20", "10 20"),
            ("1 0%", "1 0%"),
        ] {
            assert_eq!(
                Layout::parse(expression),
                Err(ParseError::InvalidTerm(String::from(token))),
                "{expression}"
            );
        }
        assert_eq!(
            ParseError::InvalidTerm(String::from("px")).to_string(),
            "invalid layout term `px`"
        );
    }

    #[test]
    fn values_stay_finite() {
        let huge = "1".repeat(50);
        assert_eq!(
            Layout::parse(&huge),
            Err(ParseError::InvalidTerm(huge.clone()))
        );
        assert_eq!(
            Layout::parse(&format!("{huge}%")),
            Err(ParseError::InvalidTerm(format!("{huge}%")))
        );

        let large = "3".repeat(39);
        assert_eq!(
            Layout::parse(&format!("{large} + {large}")),
            Err(ParseError::Overflow)
        );
        assert_eq!(
            Layout::parse(&format!("{large}% + {large}%")),
            Err(ParseError::Overflow)
        );

        let single = Layout::parse(&large).unwrap();
        assert_eq!(Layout::parse(&single.to_string()).unwrap(), single);
    }

    #[test]
    fn empty_layouts_are_positive_zero() {
        let mut empty = Layout::parse("").unwrap();
        assert!(empty.value().is_sign_positive());
        empty.update_parent_size(300.);
        assert!(empty.value().is_sign_positive());
        assert!(empty.percentage().is_sign_positive());
        assert!(empty.offset().is_sign_positive());
        assert_eq!(empty, Layout::new());
    }

    #[test]
    fn parse_2d() {
        let parsed: Layout2d = "(40, 25.3%)".parse().unwrap();
        assert_eq!(parsed, Layout2d::parse("40", "25.3%").unwrap());
        let bare: Layout2d = "10% + 5,-3".parse().unwrap();
        assert_eq!(bare.to_string(), "(10% + 5, -3)");

        assert_eq!(
            "(10 20)".parse::<Layout2d>(),
            Err(ParseError::MissingComponent)
        );
        assert_eq!(
            "(10, 20".parse::<Layout2d>(),
            Err(ParseError::UnbalancedParenthesis)
        );
        assert_eq!(
            "10, 20)".parse::<Layout2d>(),
            Err(ParseError::UnbalancedParenthesis)
        );
        assert_eq!(
            "(10, x)".parse::<Layout2d>(),
            Err(ParseError::InvalidTerm(String::from("x")))
        );
    }

    #[test]
    fn arithmetic() {
        let base = Layout::parse("50%").unwrap();
        let margin = Layout::constant(8.);

        let mut inset = base.clone() - margin.clone() * 2.;
        assert_eq!(inset.to_string(), "50% - 16");
        assert_eq!(inset.value(), -16.);
        inset.update_parent_size(200.);
        assert_eq!(inset.value(), 84.);

        let mut mirrored = -(base + margin);
        assert_eq!(mirrored.to_string(), "-50% - 8");
        mirrored.update_parent_size(100.);
        assert_eq!(mirrored.value(), -58.);
    }

    #[test]
    fn random_percentages() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let percentage = rng.random_range(0.0..=100.0_f32);
            let extent = rng.random_range(0.0..=4096.0_f32);
            let mut layout = Layout::parse(&format!("{percentage}%")).unwrap();
            layout.update_parent_size(extent);
            assert_close(layout.value(), percentage / 100. * extent);

            let once = layout.value();
            layout.update_parent_size(extent);
            assert_eq!(layout.value(), once);
        }
    }

    #[test]
    fn random_round_trips() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mut expression = String::new();
            for index in 0..rng.random_range(1..6) {
                if index > 0 {
                    expression.push_str(if rng.random_bool(0.5) { " + " } else { " - " });
                }
                let number = f32::from(rng.random_range(-1000_i16..1000)) / 10.;
                expression.push_str(&number.to_string());
                if rng.random_bool(0.5) {
                    expression.push('%');
                }
            }

            let mut original = Layout::parse(&expression).unwrap();
            let mut reparsed = Layout::parse(&original.to_string()).unwrap();
            for extent in [0., 50., 640., 1080.] {
                original.update_parent_size(extent);
                reparsed.update_parent_size(extent);
                assert!(
                    (original.value() - reparsed.value()).abs() <= 1e-2,
                    "{expression} -> {original}: {} != {}",
                    original.value(),
                    reparsed.value()
                );
            }
        }
    }
}
