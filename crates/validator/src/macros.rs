//! Macros for declaring checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`check!`]: declare a complete check (struct + `Check` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use tranzo_validator::check;
//! use tranzo_validator::foundation::Value;
//!
//! // Unit check (no fields)
//! check! {
//!     pub NonBlank;
//!     satisfied(value) { matches!(value, Value::Str(s) if !s.trim().is_empty()) }
//!     message { "Must not be blank".to_string() }
//!     fn non_blank();
//! }
//!
//! // Struct with fields
//! check! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub AtLeast { min: i64 };
//!     satisfied(self, value) { matches!(value, Value::Int(n) if *n >= self.min) }
//!     message(self) { format!("Must be at least {}", self.min) }
//!     fn at_least(min: i64);
//! }
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Declares a complete check: struct definition, `Check` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit check** (zero-sized, no fields):
/// ```rust,ignore
/// check! {
///     pub Required;
///     satisfied(value) { !value.is_absent() }
///     message { "Required".to_string() }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// check! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min { min: i64 };
///     satisfied(self, value) { matches!(value, Value::Int(n) if *n >= self.min) }
///     message(self) { format!("Minimum is {}", self.min) }
///     fn min(min: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// check! {
///     pub Range { min: Min, max: Max };
///     satisfied(self, value) { self.min.is_satisfied(value) && self.max.is_satisfied(value) }
///     message(self) { format!("Range is {} to {}", self.min.min, self.max.max) }
///     new(min: i64, max: i64) { Self { min: Min::new(min), max: Max::new(max) } }
///     fn range(min: i64, max: i64);
/// }
/// ```
#[macro_export]
macro_rules! check {
    // ── Variant 1a: Unit check (no fields) + factory fn ──────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        satisfied($val:ident) $rule:block
        message $msg:block
        fn $factory:ident();
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name;
            satisfied($val) $rule
            message $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit check (no fields), no factory ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        satisfied($val:ident) $rule:block
        message $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            fn is_satisfied(&self, $val: &$crate::foundation::Value) -> bool $rule

            fn default_message(&self) -> String $msg
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        satisfied($self_:ident, $val:ident) $rule:block
        message($self2:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            satisfied($self_, $val) $rule
            message($self2) $msg
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        satisfied($self_:ident, $val:ident) $rule:block
        message($self2:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Check for $name {
            fn is_satisfied(&$self_, $val: &$crate::foundation::Value) -> bool $rule

            fn default_message(&$self2) -> String $msg
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        satisfied($self_:ident, $val:ident) $rule:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            satisfied($self_, $val) $rule
            message($self2) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        satisfied($self_:ident, $val:ident) $rule:block
        message($self2:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Check for $name {
            fn is_satisfied(&$self_, $val: &$crate::foundation::Value) -> bool $rule

            fn default_message(&$self2) -> String $msg
        }
    };
}
