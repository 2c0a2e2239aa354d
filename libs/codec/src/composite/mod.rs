//! # Composite Field Parsers
//!
//! Acquirer, switching and additional information carry a nested TLV
//! sequence. Each detail type implements [`CompositeDetail`] to place a
//! nested field into its slot; the framing loop itself is the shared
//! [`decode_into`] used for the top-level payload.
//!
//! Nested tags with no slot are skipped. A malformed nested sequence fails
//! with the parser's error; the dispatcher wraps it with the outer tag.

mod acquirer;
mod additional_information;
mod switching;

use tracing::trace;
use types::{Composite, Field};

use qris_config::TagRegistry;

use crate::error::ProtocolResult;
use crate::parser::decode_into;

/// A fixed-shape detail decoded from a composite field's content
pub trait CompositeDetail: Default {
    /// Detail name for diagnostics
    const NAME: &'static str;

    /// Store `field` in its slot; returns `false` when the tag has no slot
    fn assign(&mut self, tags: &TagRegistry, field: Field) -> bool;
}

/// Decode nested content into a detail
pub fn parse_detail<D: CompositeDetail>(content: &str, tags: &TagRegistry) -> ProtocolResult<D> {
    let mut detail = D::default();
    decode_into(content, &mut detail, |detail, tlv| {
        let field = tlv.to_field()?;
        if !detail.assign(tags, field) {
            trace!("Ignoring unrecognized {} tag {}", D::NAME, tlv.tag);
        }
        Ok(())
    })?;
    Ok(detail)
}

/// Decode a composite field, keeping the outer field verbatim
pub fn parse_composite<D: CompositeDetail>(
    field: Field,
    tags: &TagRegistry,
) -> ProtocolResult<Composite<D>> {
    let detail = parse_detail::<D>(field.content(), tags)?;
    Ok(Composite::new(field, detail))
}
