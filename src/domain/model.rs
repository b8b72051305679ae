use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::fmt;

/// One element of the input array.
///
/// Keys match case-insensitively and a repeated key overwrites the earlier
/// value. Missing keys, `null` values and unknown keys leave the field at its
/// current value (initially the zero value). A value of the wrong JSON type is
/// still a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    pub product_title: String,
    pub is_plain_yogurt: bool,
    pub confidence: f64,
    pub is_nonfat: bool,
}

/// One element of the output array. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedProduct {
    pub product_title: String,
    pub is_yogurt: bool,
    pub is_plain: bool,
    pub is_nonfat: bool,
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformResult {
    pub products: Vec<TransformedProduct>,
    pub total_count: usize,
    pub yogurt_count: usize,
    pub plain_count: usize,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ProductVisitor)
    }
}

struct ProductVisitor;

impl<'de> Visitor<'de> for ProductVisitor {
    type Value = Product;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a product object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Product, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut product = Product::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "product_title" => assign(&mut product.product_title, map.next_value()?),
                "is_plain_yogurt" => assign(&mut product.is_plain_yogurt, map.next_value()?),
                "confidence" => assign(&mut product.confidence, map.next_value()?),
                "is_nonfat" => assign(&mut product.is_nonfat, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(product)
    }
}

fn assign<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Shortest round-trip digits in plain decimal notation, switching to
/// exponent notation below 1e-6 and from 1e21 up. Integral values carry no
/// fraction, so `1` stays `1`. Returns `None` for NaN and infinities.
pub fn format_confidence(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return Some(value.to_string());
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            Some(format!("{}e+{}", mantissa, exponent))
        }
        _ => Some(text),
    }
}

fn serialize_confidence<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = format_confidence(*value)
        .ok_or_else(|| S::Error::custom(format!("unsupported confidence value: {}", value)))?;
    let raw = RawValue::from_string(text).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}
