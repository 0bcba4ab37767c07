// src/export/decode.rs
// =============================================================================
// Small serde helpers for the quirks of the LibGuides XML export.
//
// 1. Lists are wrapped in a container element:
//        <pages><page>...</page><page>...</page></pages>
//    serde sees <pages> as a struct with a repeated "page" field, so we
//    unwrap it into a plain Vec<Page>.
//
// 2. Integers are sometimes written as empty elements (<hidden/>). The
//    export tool means "0" by that, so we read the text first and only
//    then parse it.
// =============================================================================

use serde::de::{self, Deserialize, Deserializer};

// Reads an integer element, treating an empty or missing value as 0
pub fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => text
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid integer {:?}: {}", text, e))),
    }
}

// Generates a deserializer that unwraps <container><item/>...</container>
// into a Vec of items.
//
// Example:
//   wrapped_list!(pages, Page, "page");
//   creates `fn pages(d) -> Result<Vec<Page>, _>`
macro_rules! wrapped_list {
    ($name:ident, $item:ty, $tag:literal) => {
        pub fn $name<'de, D>(deserializer: D) -> Result<Vec<$item>, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            #[derive(serde::Deserialize)]
            struct Wrapper {
                #[serde(rename = $tag, default)]
                items: Vec<$item>,
            }

            let wrapper = <Option<Wrapper> as serde::Deserialize>::deserialize(deserializer)?;
            Ok(wrapper.map(|w| w.items).unwrap_or_default())
        }
    };
}

pub(crate) use wrapped_list;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is deserialize_with?
//    - A serde field attribute naming a function that reads that one field
//    - The function gets the raw Deserializer and returns the field's value
//
// 2. Why a macro for the lists?
//    - Each list needs its own wrapper struct with a different element name
//    - macro_rules! stamps out one small function per list instead of ten
//      copies written by hand
//
// 3. Why `pub(crate) use wrapped_list;`?
//    - macro_rules! macros are not items, so they can't be `pub` directly
//    - Re-exporting with `use` lets model.rs import the macro by path
// -----------------------------------------------------------------------------
