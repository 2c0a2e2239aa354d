//! National switch merchant account template

use qris_config::TagRegistry;
use types::{Field, SwitchingDetail};

use super::CompositeDetail;
use crate::tlv_types::SwitchingTag;

impl CompositeDetail for SwitchingDetail {
    const NAME: &'static str = "switching";

    fn assign(&mut self, tags: &TagRegistry, field: Field) -> bool {
        match SwitchingTag::classify(field.tag(), tags) {
            SwitchingTag::Site => self.site = field,
            SwitchingTag::Nmid => self.nmid = field,
            SwitchingTag::Category => self.category = field,
            SwitchingTag::Unknown => return false,
        }
        true
    }
}
