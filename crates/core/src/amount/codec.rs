//! Binary and serde encodings for [`Amount`].
//!
//! The binary form is the currency code followed by the number (`USD3.45`).
//! The serde form is a `{"number": "3.45", "currency": "USD"}` object with the
//! number kept as a string.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::Amount;
use crate::error::{MoneyError, MoneyResult};

impl Amount {
    /// Encodes the amount as `<CODE><number>`, e.g. `b"USD3.45"`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{}{}", self.currency_code, self.number).into_bytes()
    }

    /// Decodes an amount produced by [`Amount::to_bytes`].
    ///
    /// Input shorter than a currency code is rejected as an invalid code.
    /// Otherwise the number is validated before the code.
    pub fn from_bytes(bytes: &[u8]) -> MoneyResult<Self> {
        const OP: &str = "Amount::from_bytes";
        if bytes.len() < 3 {
            return Err(MoneyError::invalid_currency_code(
                OP,
                String::from_utf8_lossy(bytes),
            ));
        }
        let (code, number) = bytes.split_at(3);
        Self::parse_with_op(
            &String::from_utf8_lossy(number),
            &String::from_utf8_lossy(code),
            OP,
        )
    }
}

#[derive(Serialize)]
struct AmountRef<'a> {
    number: String,
    currency: &'a str,
}

#[derive(Deserialize)]
struct AmountRepr {
    number: String,
    currency: String,
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AmountRef {
            number: self.number(),
            currency: self.currency_code,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = AmountRepr::deserialize(deserializer)?;
        Self::parse_with_op(&repr.number, &repr.currency, "Amount::deserialize")
            .map_err(de::Error::custom)
    }
}
