/// Static identity of an item type.
pub trait Item {
    fn item_id(&self) -> i16;
}

/// Ender Pearl (ID = 368)
pub struct EnderPearlItem;

impl Item for EnderPearlItem {
    fn item_id(&self) -> i16 {
        368
    }
}

const ITEM_NAMES: &[(i16, &str)] = &[(368, "ender_pearl")];

pub fn item_name(id: i16) -> Option<&'static str> {
    ITEM_NAMES
        .iter()
        .find(|(item_id, _)| *item_id == id)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ender_pearl_lookup() {
        assert_eq!(EnderPearlItem.item_id(), 368);
        assert_eq!(item_name(EnderPearlItem.item_id()), Some("ender_pearl"));
        assert_eq!(item_name(0), None);
    }
}
