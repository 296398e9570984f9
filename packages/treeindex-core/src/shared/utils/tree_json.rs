//! JSON decoding for parser trees
//!
//! Parser dumps nest two JSON levels per node (the object and its
//! `children` array), so a left-deep expression chain quickly passes
//! serde_json's default depth limit of 128. Decoding here runs without that
//! limit and grows the stack on demand instead.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Decode `bytes` with no nesting limit
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Decode `text` with no nesting limit
pub fn from_str<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    from_slice(text.as_bytes())
}
