use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    #[serde(with = "ordered_float_serde")]
    pub amount: OrderedFloat<f64>,
}

mod ordered_float_serde {
    use ordered_float::OrderedFloat;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &OrderedFloat<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.into_inner())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OrderedFloat<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let float_value = f64::deserialize(deserializer)?;
        Ok(OrderedFloat(float_value))
    }
}

impl Transaction {
    /// Create a new transaction destined for the next sealed block.
    /// No validation is performed on the fields; duplicates, zero and
    /// negative amounts are all accepted.
    pub fn new(sender: String, recipient: String, amount: f64) -> Self {
        Transaction {
            sender,
            recipient,
            amount: OrderedFloat(amount),
        }
    }
}
