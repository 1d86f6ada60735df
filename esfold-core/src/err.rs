#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CONFIG_ERR => Monoid has neither an identity value nor an append operation")]
    Empty,

    #[error("CONFIG_ERR => Monoid is missing its identity value")]
    MissingIdentity,

    #[error("CONFIG_ERR => Monoid is missing its append operation")]
    MissingAppend,
}

/// A sample on which the monoid laws do not hold. Values are kept in their
/// `Debug` rendering so the error stays independent of the monoid's type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LawViolation {
    #[error("LAW_ERR => append(identity, x) != x for x = {value}")]
    LeftIdentity { value: String },

    #[error("LAW_ERR => append(x, identity) != x for x = {value}")]
    RightIdentity { value: String },

    #[error("LAW_ERR => append is not associative for a = {a}, b = {b}, c = {c}")]
    Associativity { a: String, b: String, c: String },
}
