/// Defines a bounded sector index over the ecliptic: a newtype around `u8`
/// that can only hold `0..$count`, where each sector spans `360 / $count`
/// degrees starting at 0°.
///
/// Generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)
/// - `Display`
/// - `From<$name> for usize`
/// - `COUNT`, `WIDTH_DEG`, a checked `new`, `value` and `from_longitude`
///
/// Usage:
///   define_sector_index!(ZodiacIndex, 12);
#[macro_export]
macro_rules! define_sector_index {
    ($(#[$meta:meta])* $name:ident, $count:expr) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
        )]
        pub struct $name(u8);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$name> for usize {
            fn from(v: $name) -> Self {
                v.0 as usize
            }
        }

        impl $name {
            /// Number of sectors on the ecliptic.
            pub const COUNT: usize = $count;

            /// Angular width of one sector in degrees.
            pub const WIDTH_DEG: f64 = 360.0 / $count as f64;

            /// Checked constructor; `None` when `value >= COUNT`.
            pub fn new(value: u8) -> Option<Self> {
                if (value as usize) < Self::COUNT {
                    Some($name(value))
                } else {
                    None
                }
            }

            pub fn value(&self) -> u8 {
                self.0
            }

            /// Sector containing `longitude_deg`. Sectors are closed at their
            /// lower edge and any finite real input is accepted.
            ///
            /// Non-finite input falls into sector 0; callers that care must
            /// check finiteness first.
            pub fn from_longitude(longitude_deg: f64) -> Self {
                let lon = $crate::models::sector::normalize_degrees(longitude_deg);
                let raw = (lon * Self::COUNT as f64 / 360.0).floor();
                // values just under 360 can round up to COUNT
                let idx = if raw.is_finite() && raw >= 0.0 {
                    (raw as usize).min(Self::COUNT - 1)
                } else {
                    0
                };
                $name(idx as u8)
            }

            /// Every sector in ecliptic order.
            pub fn all() -> impl Iterator<Item = Self> {
                (0..Self::COUNT as u8).map($name)
            }
        }
    };
}
