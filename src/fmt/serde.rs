/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

[`TimeZoneInfo`](crate::tz::TimeZoneInfo) itself implements `Serialize` and
`Deserialize` via its POSIX `TZ` string, so no helper is needed for it. The
helpers here are for storing the other values of this crate in their compact
integer forms:

* [`transition_rule::packed`]
    * [`tzrule::fmt::serde::transition_rule::packed::required`](self::transition_rule::packed::required)
    * [`tzrule::fmt::serde::transition_rule::packed::optional`](self::transition_rule::packed::optional)
* [`duration::microsecond`]
    * [`tzrule::fmt::serde::duration::microsecond::required`](self::duration::microsecond::required)
    * [`tzrule::fmt::serde::duration::microsecond::optional`](self::duration::microsecond::optional)

# Example

```
use tzrule::{civil::Weekday, tz::{TransitionRule, Week}};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "tzrule::fmt::serde::transition_rule::packed::required")]
    start: TransitionRule,
}

let json = r#"{"start":3296258}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(
    got.start,
    TransitionRule::floating(2, 3, Weekday::Sunday, Week::Second, 0),
);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// A generic visitor for `Option<T>` that defers to an integer visitor.
struct OptionalVisitor<V> {
    visitor: V,
    signed: bool,
}

impl<'de, T, V: serde::de::Visitor<'de, Value = T>> serde::de::Visitor<'de>
    for OptionalVisitor<V>
{
    type Value = Option<T>;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.visitor.expecting(f)?;
        f.write_str(" or `None`")
    }

    #[inline]
    fn visit_some<D: serde::de::Deserializer<'de>>(
        self,
        de: D,
    ) -> Result<Option<T>, D::Error> {
        if self.signed {
            de.deserialize_i64(self.visitor).map(Some)
        } else {
            de.deserialize_u64(self.visitor).map(Some)
        }
    }

    #[inline]
    fn visit_none<E: serde::de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }
}

/// Convenience routines for (de)serializing
/// [`TransitionRule`](crate::tz::TransitionRule) values as integers.
pub mod transition_rule {
    /// (De)serialize a transition rule as its 24-bit packed form.
    ///
    /// Deserialization rejects integers with bits set above the low 24.
    /// Packed values with an invalid payload decode to an absent rule, the
    /// same as [`TransitionRule::from_packed`](crate::tz::TransitionRule::from_packed).
    pub mod packed {
        use serde::de;

        use crate::tz::TransitionRule;

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = TransitionRule;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a 24-bit packed DST transition rule")
            }

            #[inline]
            fn visit_u64<E: de::Error>(
                self,
                v: u64,
            ) -> Result<TransitionRule, E> {
                let bits = u32::try_from(v)
                    .ok()
                    .filter(|&bits| bits <= 0xFF_FFFF)
                    .ok_or_else(|| {
                        de::Error::custom(format_args!(
                            "packed transition rule `{v}` \
                             does not fit in 24 bits",
                        ))
                    })?;
                Ok(TransitionRule::from_packed(bits))
            }

            #[inline]
            fn visit_i64<E: de::Error>(
                self,
                v: i64,
            ) -> Result<TransitionRule, E> {
                let v = u64::try_from(v).map_err(|_| {
                    de::Error::custom(format_args!(
                        "packed transition rule `{v}` is negative",
                    ))
                })?;
                self.visit_u64(v)
            }
        }

        /// (De)serialize a required packed transition rule.
        pub mod required {
            /// Serialize a required transition rule as its packed form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                rule: &crate::tz::TransitionRule,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                se.serialize_u32(rule.to_packed())
            }

            /// Deserialize a required transition rule from its packed form.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<crate::tz::TransitionRule, D::Error> {
                de.deserialize_u64(super::Visitor)
            }
        }

        /// (De)serialize an optional packed transition rule.
        pub mod optional {
            /// Serialize an optional transition rule as its packed form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                rule: &Option<crate::tz::TransitionRule>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                match *rule {
                    None => se.serialize_none(),
                    Some(ref rule) => se.serialize_u32(rule.to_packed()),
                }
            }

            /// Deserialize an optional transition rule from its packed
            /// form.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<crate::tz::TransitionRule>, D::Error> {
                de.deserialize_option(crate::fmt::serde::OptionalVisitor {
                    visitor: super::Visitor,
                    signed: false,
                })
            }
        }
    }
}

/// Convenience routines for (de)serializing [`Duration`](crate::Duration)
/// values as integers.
pub mod duration {
    /// (De)serialize a duration as a signed integer number of microseconds.
    pub mod microsecond {
        use serde::de;

        use crate::Duration;

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an integer number of microseconds")
            }

            #[inline]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
                Ok(Duration::from_micros(v))
            }

            #[inline]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
                let v = i64::try_from(v).map_err(|_| {
                    de::Error::custom(format_args!(
                        "microseconds `{v}` too big for a duration",
                    ))
                })?;
                self.visit_i64(v)
            }
        }

        /// (De)serialize a required integer number of microseconds.
        pub mod required {
            /// Serialize a required duration as microseconds.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                duration: &crate::Duration,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                se.serialize_i64(duration.as_micros())
            }

            /// Deserialize a required duration from microseconds.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<crate::Duration, D::Error> {
                de.deserialize_i64(super::Visitor)
            }
        }

        /// (De)serialize an optional integer number of microseconds.
        pub mod optional {
            /// Serialize an optional duration as microseconds.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                duration: &Option<crate::Duration>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                match *duration {
                    None => se.serialize_none(),
                    Some(duration) => se.serialize_i64(duration.as_micros()),
                }
            }

            /// Deserialize an optional duration from microseconds.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<crate::Duration>, D::Error> {
                de.deserialize_option(crate::fmt::serde::OptionalVisitor {
                    visitor: super::Visitor,
                    signed: true,
                })
            }
        }
    }
}
