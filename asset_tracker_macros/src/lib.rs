mod record;

use proc_macro::TokenStream;

/// Derive macro implementing `asset_tracker::Record` for a struct.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "assets")]
/// struct Asset {
///     #[record(id)]
///     id: u64,
///     name: String,
/// }
/// ```
///
/// - `collection` defaults to the snake_case type name plus `s`.
/// - The identity field defaults to a field named `id` and must be a `u64`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
