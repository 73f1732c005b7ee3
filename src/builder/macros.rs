//! Macros for declaring state and event enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Each variant's name is its identifier. The generated enum derives
/// `serde::Serialize` and `serde::Deserialize`, so the calling crate needs
/// `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use stepwise::core::State;
/// use stepwise::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Created,
///         Paid,
///         Shipped,
///     }
/// }
///
/// assert_eq!(OrderState::Paid.name(), "Paid");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a fieldless enum and implement [`Event`](crate::core::Event) for it.
///
/// # Example
///
/// ```
/// use stepwise::core::Event;
/// use stepwise::event_enum;
///
/// event_enum! {
///     pub enum OrderEvent {
///         Pay,
///         Ship,
///     }
/// }
///
/// assert_eq!(OrderEvent::Ship.name(), "Ship");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// Documented states.
            pub enum PublicState {
                A,
                #[allow(dead_code)]
                B,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
    }

    #[test]
    fn generated_enums_serialize_by_variant_name() {
        let json = serde_json::to_string(&TestEvent::Finish).unwrap();
        assert_eq!(json, "\"Finish\"");

        let state: TestState = serde_json::from_str("\"Processing\"").unwrap();
        assert_eq!(state, TestState::Processing);
    }
}
