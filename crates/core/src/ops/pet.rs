//! Pet resource operations.

use serde_json::{json, Value};

use crate::result::OperationResult;
use crate::simulation;
use crate::types::{JsonMap, ResourceId};
use crate::validate;

/// Required body keys for `updatePet`, in declared order.
pub const UPDATE_PET_REQUIRED: &[&str] = &["id", "name", "photoUrls"];

/// Required body keys for `addPet`, in declared order.
pub const ADD_PET_REQUIRED: &[&str] = &["name", "photoUrls"];

/// PUT /pet -- update an existing pet, echoing the payload.
pub fn update_pet(pet: &JsonMap) -> OperationResult {
    if let Err(err) = validate::require_fields(pet, UPDATE_PET_REQUIRED) {
        return err.into();
    }

    OperationResult::ok(json!({
        "operationId": "updatePet",
        "method": "PUT",
        "path": "/pet",
        "contentType": simulation::JSON_CONTENT_TYPE,
        "pet": pet,
    }))
}

/// POST /pet -- add a new pet to the store, echoing the payload.
pub fn add_pet(pet: &JsonMap) -> OperationResult {
    if let Err(err) = validate::require_fields(pet, ADD_PET_REQUIRED) {
        return err.into();
    }

    OperationResult::ok(json!({
        "message": "Pet added successfully",
        "pet": pet,
    }))
}

/// GET /pet/findByStatus -- filter the canned pet table by status.
pub fn find_pets_by_status(status: &str) -> OperationResult {
    if status.parse::<simulation::PetStatus>().is_err() {
        return OperationResult::validation(format!(
            "Invalid status '{status}'. Must be one of: available, pending, sold."
        ));
    }

    let pets: Vec<Value> = simulation::status_pets()
        .into_iter()
        .filter(|pet| pet["status"] == status)
        .collect();

    OperationResult::ok(json!({
        "message": format!("Found {} pets with status '{status}'.", pets.len()),
        "pets": pets,
    }))
}

/// GET /pet/findByTags -- return the canned tag pets for a tag list.
///
/// `tags` may be a comma-separated string or an array; empty after
/// normalization is a client error.
pub fn find_pets_by_tags(tags: &Value) -> OperationResult {
    let tag_list = validate::normalize_tags(tags);
    let Some(first_tag) = tag_list.first() else {
        return OperationResult::validation("Provide at least one tag (e.g., 'tag1,tag2').");
    };

    OperationResult::ok(json!({
        "operationId": "findPetsByTags",
        "request": { "tags": tag_list },
        "result": simulation::tag_pets(first_tag),
    }))
}

/// GET /pet/{petId} -- fetch a single pet by id.
pub fn get_pet_by_id(pet_id: ResourceId) -> OperationResult {
    if let Err(err) = validate::require_positive_id(pet_id) {
        return err.into();
    }
    if !simulation::pet_on_record(pet_id) {
        return OperationResult::not_found("Pet not found");
    }

    OperationResult::ok(json!({
        "description": format!("Pet data for ID {pet_id}"),
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// POST /pet/{petId} -- update name and/or status from form-style fields.
///
/// Empty strings count as absent; at least one field must be supplied.
pub fn update_pet_with_form(
    pet_id: ResourceId,
    name: Option<&str>,
    status: Option<&str>,
) -> OperationResult {
    if let Err(err) = validate::require_positive_id(pet_id) {
        return err.into();
    }

    let mut updated_fields = JsonMap::new();
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        updated_fields.insert("name".to_string(), json!(name));
    }
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        updated_fields.insert("status".to_string(), json!(status));
    }

    if updated_fields.is_empty() {
        return OperationResult::validation(
            "No update fields provided (name or status required).",
        );
    }

    OperationResult::ok(json!({
        "description": format!("Pet {pet_id} updated successfully."),
        "updated_fields": updated_fields,
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// DELETE /pet/{petId} -- delete a pet by id.
pub fn delete_pet(pet_id: ResourceId) -> OperationResult {
    if let Err(err) = validate::require_positive_id(pet_id) {
        return err.into();
    }
    if !simulation::pet_on_record(pet_id) {
        return OperationResult::not_found(format!("Pet with ID {pet_id} not found"));
    }

    OperationResult::ok(json!({
        "message": format!("Pet with ID {pet_id} deleted successfully"),
    }))
}

/// POST /pet/{petId}/uploadImage -- report receipt of an image payload.
///
/// The success payload is built before the partition check; the
/// not-found branch still suppresses it regardless of payload validity.
pub fn upload_pet_image(
    pet_id: ResourceId,
    additional_metadata: Option<&str>,
    image: Option<&[u8]>,
) -> OperationResult {
    if let Err(err) = validate::require_positive_id(pet_id) {
        return err.into();
    }

    let response = json!({
        "description": format!("Image uploaded for pet {pet_id}"),
        "metadata": additional_metadata
            .filter(|m| !m.is_empty())
            .unwrap_or("None provided"),
        "imageSize": image.map_or(0, <[u8]>::len),
    });

    if !simulation::pet_on_record(pet_id) {
        return OperationResult::not_found("Pet not found");
    }

    OperationResult::ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pet_payload(pairs: &[(&str, Value)]) -> JsonMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    // -- updatePet / addPet --

    #[test]
    fn update_pet_requires_id_name_and_photo_urls() {
        let pet = pet_payload(&[("name", json!("Rex"))]);
        let result = update_pet(&pet);
        assert_eq!(result.http_status(), 400);
        assert_eq!(
            result.message(),
            Some("Missing required fields: id, photoUrls")
        );
    }

    #[test]
    fn update_pet_echoes_the_payload() {
        let pet = pet_payload(&[
            ("id", json!(7)),
            ("name", json!("Rex")),
            ("photoUrls", json!(["http://example.com/rex.png"])),
            ("status", json!("available")),
        ]);
        let result = update_pet(&pet);
        assert_eq!(result.http_status(), 200);
        let body = result.body().unwrap();
        assert_eq!(body["pet"]["name"], "Rex");
        assert_eq!(body["pet"]["status"], "available");
        assert_eq!(body["operationId"], "updatePet");
    }

    #[test]
    fn add_pet_does_not_require_an_id() {
        let pet = pet_payload(&[
            ("name", json!("Rex")),
            ("photoUrls", json!([])),
        ]);
        assert_eq!(add_pet(&pet).http_status(), 200);
    }

    #[test]
    fn add_pet_lists_omitted_keys_in_order() {
        let result = add_pet(&JsonMap::new());
        assert_eq!(
            result.message(),
            Some("Missing required fields: name, photoUrls")
        );
    }

    // -- findPetsByStatus --

    #[test]
    fn bogus_status_is_rejected() {
        let result = find_pets_by_status("bogus");
        assert_eq!(result.http_status(), 400);
        assert!(result.message().unwrap().contains("Invalid status 'bogus'"));
    }

    #[test]
    fn available_matches_exactly_one_pet() {
        let result = find_pets_by_status("available");
        assert_eq!(result.http_status(), 200);
        let body = result.body().unwrap();
        let pets = body["pets"].as_array().unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0]["id"], 1);
        assert_eq!(pets[0]["status"], "available");
        assert_eq!(body["message"], "Found 1 pets with status 'available'.");
    }

    // -- findPetsByTags --

    #[test]
    fn tags_are_normalized_before_use() {
        let result = find_pets_by_tags(&json!("a, b ,,c"));
        let body = result.body().unwrap();
        assert_eq!(body["request"]["tags"], json!(["a", "b", "c"]));
    }

    #[test]
    fn tag_pets_echo_only_the_first_tag() {
        let result = find_pets_by_tags(&json!(["fluffy", "small"]));
        let pets = result.body().unwrap()["result"].as_array().unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0]["tags"], json!(["fluffy"]));
        assert_eq!(pets[1]["tags"], json!(["fluffy"]));
    }

    #[test]
    fn empty_tag_input_is_rejected() {
        for tags in [json!(""), json!(" , ,"), json!([]), Value::Null] {
            let result = find_pets_by_tags(&tags);
            assert_eq!(result.http_status(), 400, "tags {tags:?}");
        }
    }

    // -- getPetById --

    #[test]
    fn pet_id_partitions_are_non_overlapping() {
        assert_eq!(get_pet_by_id(0).http_status(), 400);
        assert_eq!(get_pet_by_id(-1).http_status(), 400);
        assert_eq!(get_pet_by_id(9999).http_status(), 404);
        assert_eq!(get_pet_by_id(42).http_status(), 200);
    }

    #[test]
    fn missing_pet_message_is_fixed() {
        assert_eq!(get_pet_by_id(9999).message(), Some("Pet not found"));
    }

    // -- updatePetWithForm --

    #[test]
    fn form_update_needs_at_least_one_field() {
        let result = update_pet_with_form(5, None, None);
        assert_eq!(result.http_status(), 400);
        assert_eq!(
            result.message(),
            Some("No update fields provided (name or status required).")
        );
    }

    #[test]
    fn empty_form_strings_count_as_absent() {
        let result = update_pet_with_form(5, Some(""), Some(""));
        assert_eq!(result.http_status(), 400);
    }

    #[test]
    fn form_update_echoes_supplied_fields_only() {
        let result = update_pet_with_form(5, Some("Rex"), None);
        let body = result.body().unwrap();
        assert_eq!(body["updated_fields"], json!({ "name": "Rex" }));
    }

    #[test]
    fn form_update_checks_id_before_fields() {
        let result = update_pet_with_form(0, None, None);
        assert_eq!(result.message(), Some("Invalid ID supplied"));
    }

    // -- deletePet --

    #[test]
    fn delete_pet_partitions_match_fetch() {
        assert_eq!(delete_pet(0).http_status(), 400);
        assert_eq!(delete_pet(9999).http_status(), 404);
        assert_eq!(delete_pet(42).http_status(), 200);
    }

    #[test]
    fn delete_pet_messages_carry_the_id() {
        assert_eq!(
            delete_pet(9999).message(),
            Some("Pet with ID 9999 not found")
        );
        let ok = delete_pet(42);
        assert_eq!(
            ok.body().unwrap()["message"],
            "Pet with ID 42 deleted successfully"
        );
    }

    // -- uploadPetImage --

    #[test]
    fn upload_reports_payload_byte_length() {
        let result = upload_pet_image(5, Some("profile shot"), Some(b"abc"));
        let body = result.body().unwrap();
        assert_eq!(body["imageSize"], 3);
        assert_eq!(body["metadata"], "profile shot");
    }

    #[test]
    fn upload_defaults_for_absent_payload_and_metadata() {
        let result = upload_pet_image(5, None, None);
        let body = result.body().unwrap();
        assert_eq!(body["imageSize"], 0);
        assert_eq!(body["metadata"], "None provided");
    }

    #[test]
    fn upload_not_found_overrides_a_valid_payload() {
        let result = upload_pet_image(9999, Some("meta"), Some(b"bytes"));
        assert_eq!(result.http_status(), 404);
        assert_eq!(result.message(), Some("Pet not found"));
    }

    #[test]
    fn upload_invalid_id_wins_over_not_found() {
        assert_eq!(upload_pet_image(0, None, None).http_status(), 400);
    }

    // -- Idempotence --

    #[test]
    fn repeated_calls_produce_identical_results() {
        let pet = pet_payload(&[("name", json!("Rex")), ("photoUrls", json!([]))]);
        assert_eq!(add_pet(&pet), add_pet(&pet));
        assert_eq!(get_pet_by_id(42), get_pet_by_id(42));
        assert_eq!(
            find_pets_by_tags(&json!("a,b")),
            find_pets_by_tags(&json!("a,b"))
        );
    }
}
