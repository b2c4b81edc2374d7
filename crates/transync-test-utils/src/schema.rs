//! Schemas used across tests.

use transync_core::Schema;

/// A schema exercising nesting, interpolation and plural suffixes.
pub fn sample_schema() -> Schema {
    Schema::builder()
        .leaf("T_GROUP.key", "Value")
        .leaf("T_GROUP.nestedObject.nestedKey", "Nested Value")
        .leaf("T_GROUP.interpolation", "Your inserted value: {{val}}")
        .leaf(
            "T_GROUP.pluralization",
            "You can leave this blank if you only need the contextualized versions",
        )
        .leaf("T_GROUP.pluralization_one", "I own a bird")
        .leaf("T_GROUP.pluralization_other", "I own {{count}} birds")
        .leaf("T_GROUP.dateTime", "{{date, DATETIME}}")
        .leaf("T_ANIMALS.bird.budgie", "My budgie is small but cuddly.")
        .leaf(
            "T_ANIMALS.bird.cockatoo",
            "My cockatoo is crazy. He will summon {{monster}} on {{date, DATE}}.",
        )
        .leaf("T_SENTENCES.myBirds", "")
        .leaf("T_SENTENCES.myBirds_one", "I own an adorable bird.")
        .leaf("T_SENTENCES.myBirds_other", "I own {{count}} lovely birds.")
        .build()
        .expect("sample schema")
}

/// `{"bird": {"budgie": ..., "cockatoo": ...}}`
pub fn animal_schema() -> Schema {
    Schema::builder()
        .leaf("bird.budgie", "My budgie is small but cuddly.")
        .leaf("bird.cockatoo", "My cockatoo is crazy.")
        .build()
        .expect("animal schema")
}
