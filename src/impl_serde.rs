//!
//! Support for serde implementations
//!
use crate::*;
use serde_crate::{de, ser};

impl ser::Serialize for RoundingMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Used by SerDe to construct a RoundingMode
struct RoundingModeVisitor;

impl<'de> de::Visitor<'de> for RoundingModeVisitor {
    type Value = RoundingMode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a rounding mode name or ordinal between 0 and 8")
    }

    fn visit_str<E>(self, value: &str) -> Result<RoundingMode, E>
    where
        E: de::Error,
    {
        value.parse().map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<RoundingMode, E>
    where
        E: de::Error,
    {
        u8::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            .and_then(|ordinal| RoundingMode::try_from(ordinal).map_err(|err| E::custom(format!("{}", err))))
    }

    fn visit_i64<E>(self, value: i64) -> Result<RoundingMode, E>
    where
        E: de::Error,
    {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }
}

impl<'de> de::Deserialize<'de> for RoundingMode {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(RoundingModeVisitor)
    }
}


#[cfg(test)]
mod test_jsonification {
    use super::*;
    extern crate serde_json;

    macro_rules! impl_case {
        ($name:ident : $input:literal => (error)) => {
            #[test]
            fn $name() {
                let res = serde_json::from_str::<RoundingMode>($input);
                assert!(res.is_err());
            }
        };
        ($name:ident : $input:literal => $expected:ident) => {
            #[test]
            fn $name() {
                let mode: RoundingMode = serde_json::from_str($input).unwrap();
                assert_eq!(mode, RoundingMode::$expected);
            }
        };
    }

    impl_case!(case_name: r#""MidpointToZero""# => MidpointToZero);
    impl_case!(case_ordinal_0: "0" => MidpointToEven);
    impl_case!(case_ordinal_8: "8" => MidpointToPositiveInfinity);
    impl_case!(case_ordinal_9: "9" => (error));
    impl_case!(case_ordinal_300: "300" => (error));
    impl_case!(case_negative: "-1" => (error));
    impl_case!(case_unknown_name: r#""HalfUp""# => (error));
    impl_case!(case_float: "1.5" => (error));

    #[test]
    fn serializes_as_name() {
        for mode in RoundingMode::ALL.iter() {
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.name()));
            assert_eq!(serde_json::from_str::<RoundingMode>(&json).unwrap(), *mode);
        }
    }
}
