//! Acquirer merchant account template

use qris_config::TagRegistry;
use types::{AcquirerDetail, Field};

use super::CompositeDetail;
use crate::tlv_types::AcquirerTag;

impl CompositeDetail for AcquirerDetail {
    const NAME: &'static str = "acquirer";

    fn assign(&mut self, tags: &TagRegistry, field: Field) -> bool {
        match AcquirerTag::classify(field.tag(), tags) {
            AcquirerTag::Site => self.site = field,
            AcquirerTag::Mpan => self.mpan = field,
            AcquirerTag::TerminalId => self.terminal_id = field,
            AcquirerTag::Category => self.category = field,
            AcquirerTag::Unknown => return false,
        }
        true
    }
}
