/// Declares a `u8`-backed label table with `name()`, `TryFrom<u8>`,
/// `From<_> for u8` and `Display`
macro_rules! label_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every listed entry, in discriminant order
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Protocol label
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// Label for a raw value, if listed
            pub fn label(value: u8) -> Option<&'static str> {
                Self::try_from(value).ok().map(Self::name)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::Error;

            fn try_from(value: u8) -> $crate::Result<Self> {
                match value {
                    $( $value => Ok(Self::$variant), )+
                    #[allow(unreachable_patterns)]
                    _ => Err($crate::Error::UnknownValue { kind: $kind, value }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
