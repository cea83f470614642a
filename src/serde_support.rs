use crate::bitboard::Bitboard;
use crate::square::Square;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Bitboard {
    /// Serialized as a lowercase `0x`-prefixed hex string, e.g. `"0x52bffff"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:#x}", self.bits()))
    }
}

impl<'de> Deserialize<'de> for Bitboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| {
                serde::de::Error::custom(format!("expected 0x-prefixed hex string: {:?}", s))
            })?;

        let bits = u64::from_str_radix(digits, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex digits: {}", e)))?;

        if bits > Bitboard::ALL.bits() {
            return Err(serde::de::Error::custom(format!(
                "bitboard value does not fit in 45 bits: {}",
                s
            )));
        }

        Ok(Bitboard::new(bits))
    }
}

impl Serialize for Square {
    /// Serialized by name, e.g. `"E3"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
