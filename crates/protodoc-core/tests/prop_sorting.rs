//! Property tests for name ordering of fields and enum values

use proptest::prelude::*;
use protodoc_core::{Enum, EnumValue, Field, Message};

fn field_named(name: &str, tag: usize) -> Field {
    Field {
        name: name.to_string(),
        description: tag.to_string(),
        display_type: "string".to_string(),
    }
}

proptest! {
    #[test]
    fn fields_sorted_and_stable(names in prop::collection::vec("[a-c]{0,3}", 0..24)) {
        let fields: Vec<Field> = names.iter().enumerate().map(|(i, n)| field_named(n, i)).collect();
        let message = Message::new("M", String::new(), fields);

        prop_assert_eq!(message.has_fields, !names.is_empty());
        for pair in message.fields.windows(2) {
            prop_assert!(pair[0].name <= pair[1].name);
            if pair[0].name == pair[1].name {
                // Equal names keep their declaration order
                let a: usize = pair[0].description.parse().unwrap();
                let b: usize = pair[1].description.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn enum_values_sorted_by_name(entries in prop::collection::vec(("[A-Z_]{1,6}", any::<i32>()), 0..24)) {
        let values: Vec<EnumValue> = entries
            .iter()
            .map(|(name, number)| EnumValue {
                name: name.clone(),
                number: *number,
                description: String::new(),
            })
            .collect();
        let en = Enum::new("E", String::new(), values);

        prop_assert_eq!(en.values.len(), entries.len());
        for pair in en.values.windows(2) {
            prop_assert!(pair[0].name <= pair[1].name);
        }
    }
}
