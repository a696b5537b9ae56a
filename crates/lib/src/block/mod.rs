//! The block model.
//!
//! A [`Block`] is the atomic unit of a document. Its identity ([`BlockKey`])
//! never changes; its position and payload fields are updated by fragments.
//! On the wire a block is the pair `key -> payload`, where the payload holds
//! the kind-specific fields plus `position`:
//!
//! ```json
//! { "paragraph:1f0c...": { "markdown": "Some **bold** text", "position": 1000 } }
//! ```
//!
//! Which text field a block carries, and therefore how its data merges with
//! a neighbour's, is decided by its [`Capability`], derived from the type tag.

use crate::{
    constants::{DEFAULT_POSITION, MARKDOWN, ORDERED, PLACEHOLDER, POSITION, SRC, TEXT, URL},
    crdt::{Doc, TombstonePolicy, Value},
};

mod errors;
mod key;
mod kind;
pub mod merge;

pub use errors::BlockError;
pub use key::BlockKey;
pub use kind::{BlockType, Capability};
pub use merge::{merge_data, merge_data_or_fallback};

/// A typed content block with a sort position.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    key: BlockKey,
    position: f64,
    /// Kind-specific payload, without `position`
    fields: Doc,
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Block {
    /// Creates a block of `block_type` with a fresh id at the default position.
    pub fn new(block_type: BlockType, fields: Doc) -> Self {
        Self {
            key: BlockKey::new(block_type, fresh_id()),
            position: DEFAULT_POSITION,
            fields,
        }
    }

    pub fn paragraph(markdown: impl Into<String>) -> Self {
        Self::new(
            BlockType::Paragraph,
            Doc::new().with(MARKDOWN, markdown.into()),
        )
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(BlockType::Header, Doc::new().with(TEXT, text.into()))
    }

    pub fn list_item(markdown: impl Into<String>, ordered: bool) -> Self {
        Self::new(
            BlockType::ListItem,
            Doc::new()
                .with(ORDERED, ordered)
                .with(MARKDOWN, markdown.into()),
        )
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(BlockType::Image, Doc::new().with(SRC, src.into()))
    }

    /// An empty placeholder block.
    pub fn spacer() -> Self {
        Self::new(BlockType::Spacer, Doc::new().with(TEXT, ""))
    }

    /// A prompt block showing `placeholder` until the user types.
    pub fn prompt(placeholder: impl Into<String>) -> Self {
        Self::new(
            BlockType::Prompt,
            Doc::new()
                .with(PLACEHOLDER, placeholder.into())
                .with(TEXT, ""),
        )
    }

    /// An embed for `url`.
    ///
    /// The resolver fills in `provider`, `html`, `width` and `height` later
    /// through an update.
    pub fn embed(url: impl Into<String>) -> Self {
        Self::new(BlockType::Embed, Doc::new().with(URL, url.into()))
    }

    /// Rebuilds a block from a snapshot entry, completing its identity from
    /// the key. A payload without a position sorts at `0`.
    pub fn from_entry(key: BlockKey, payload: &Doc) -> Self {
        let position = payload.get_f64(POSITION).unwrap_or(0.0);
        let mut fields = payload.without_tombstones();
        fields.remove(POSITION);
        Self {
            key,
            position,
            fields,
        }
    }

    /// Parses a raw `key -> value` pair of a partial document.
    pub fn from_raw(key: &str, value: &Value) -> Result<Self, BlockError> {
        let key = BlockKey::parse(key)?;
        let payload = value.as_map().ok_or_else(|| BlockError::InvalidPayload {
            key: key.to_string(),
            actual: value.type_name().to_string(),
        })?;
        Ok(Self::from_entry(key, payload))
    }

    /// A copy of this block's kind and content under a fresh id at `position`.
    pub fn duplicate(&self, position: f64) -> Self {
        Self {
            key: BlockKey::new(self.key.block_type.clone(), fresh_id()),
            position,
            fields: self.fields.clone(),
        }
    }

    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    pub fn with_id(mut self, block_id: impl Into<String>) -> Self {
        self.key.block_id = block_id.into();
        self
    }

    pub fn with_field(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Sets a payload field. Writing `position` moves the block instead.
    pub fn set_field(&mut self, field: &str, value: impl Into<Value>) {
        let value = value.into();
        if field == POSITION {
            if let Some(position) = value.as_f64() {
                self.position = position;
            }
            return;
        }
        self.fields.set(field, value);
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    pub fn block_type(&self) -> &BlockType {
        &self.key.block_type
    }

    pub fn id(&self) -> &str {
        &self.key.block_id
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn fields(&self) -> &Doc {
        &self.fields
    }

    pub fn capability(&self) -> Capability {
        self.key.block_type.capability()
    }

    pub fn markdown(&self) -> Option<&str> {
        self.fields.get_text(MARKDOWN)
    }

    pub fn text(&self) -> Option<&str> {
        self.fields.get_text(TEXT)
    }

    pub fn ordered(&self) -> bool {
        self.fields.get_as::<bool>(ORDERED).unwrap_or(false)
    }

    pub fn src(&self) -> Option<&str> {
        self.fields.get_text(SRC)
    }

    pub fn url(&self) -> Option<&str> {
        self.fields.get_text(URL)
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.fields.get_text(PLACEHOLDER)
    }

    /// The text this block's capability says it carries.
    ///
    /// `None` for void blocks; a textual block missing its field reads as
    /// empty.
    pub fn text_content(&self) -> Option<&str> {
        let field = self.capability().text_field()?;
        Some(self.fields.get_text(field).unwrap_or_default())
    }

    /// The wire payload of this block: its fields plus, unless
    /// `drop_position`, its position.
    pub fn data(&self, drop_position: bool) -> Doc {
        let mut data = self.fields.clone();
        if !drop_position {
            data.set(POSITION, self.position);
        }
        data
    }

    /// A one-entry fragment writing this block.
    pub fn to_fragment(&self) -> Doc {
        Doc::new().with(self.key.to_string(), self.data(false))
    }

    /// Applies a payload delta to this block in place.
    pub fn apply(&mut self, delta: &Doc) {
        let mut payload = self.data(false);
        payload.merge(delta, TombstonePolicy::Apply);
        *self = Self::from_entry(self.key.clone(), &payload);
    }
}
