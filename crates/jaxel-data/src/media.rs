//! Image-field normalization at the API-response boundary.
//!
//! The backend's `imageUrl` field is inconsistent: sometimes a bare
//! filename, sometimes an absolute URL, sometimes a JSON string array
//! serialized into a string. Every consumer used to re-parse it inline;
//! here it is normalized exactly once. Malformed data degrades to something
//! renderable instead of erroring.

use crate::api::ProductDto;

/// Shown when a product has no usable image at all.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=No+Image";

/// Normalize a raw image field into a list of image references.
///
/// - `None`, empty, `"null"`, `"undefined"` -> empty list
/// - `"[...]"` -> parsed as a JSON string array, falling back to a
///   single-element list with the raw value if the parse fails
/// - anything else -> single-element list
pub fn normalize_image_field(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(s) => s.trim(),
        None => return Vec::new(),
    };
    if raw.is_empty() || raw == "null" || raw == "undefined" {
        return Vec::new();
    }
    if raw.starts_with('[') && raw.ends_with(']') {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(images) if !images.is_empty() => return images,
            Ok(_) => return Vec::new(),
            Err(_) => return vec![raw.to_string()],
        }
    }
    vec![raw.to_string()]
}

/// The images to render for a product, with a placeholder when it has none.
pub fn product_images(product: &ProductDto) -> Vec<String> {
    let images = normalize_image_field(product.image_url.as_deref());
    if images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        images
    }
}

/// Resolve an image reference to a full URL.
///
/// Absolute `http(s)` URLs and `data:` URIs pass through untouched. Bare
/// filenames are served from the upload host under the seller's folder when
/// a usable seller name is present, otherwise from the upload root.
pub fn resolve_image_url(base: &str, image: &str, seller_name: Option<&str>) -> String {
    if image.starts_with("http") || image.starts_with("data:") {
        return image.to_string();
    }
    let base = base.trim_end_matches('/');
    match seller_name.map(clean_seller_folder).filter(|s| !s.is_empty()) {
        Some(folder) => format!("{}/{}/{}", base, folder, image),
        None => format!("{}/{}", base, image),
    }
}

/// Derive a seller's upload-folder name from their display name.
///
/// Whitespace runs and non `[A-Za-z0-9_-]` characters become underscores,
/// underscore runs collapse, and leading/trailing underscores are trimmed.
/// Placeholder strings ("null", "undefined") yield an empty folder.
fn clean_seller_folder(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() || name == "null" || name == "undefined" {
        return String::new();
    }
    let mut folder = String::with_capacity(name.len());
    let mut last_was_underscore = false;
    for c in name.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '-' {
            c
        } else {
            '_'
        };
        if mapped == '_' {
            if !last_was_underscore {
                folder.push('_');
            }
            last_was_underscore = true;
        } else {
            folder.push(mapped);
            last_was_underscore = false;
        }
    }
    folder.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaxel_commerce::ProductId;

    fn product(image_url: Option<&str>) -> ProductDto {
        ProductDto {
            id: ProductId::new(1),
            title: "Kemeja".to_string(),
            price: 100_000,
            image_url: image_url.map(String::from),
            seller_name: None,
        }
    }

    #[test]
    fn test_missing_and_placeholder_values_normalize_to_empty() {
        assert!(normalize_image_field(None).is_empty());
        assert!(normalize_image_field(Some("")).is_empty());
        assert!(normalize_image_field(Some("null")).is_empty());
        assert!(normalize_image_field(Some("undefined")).is_empty());
    }

    #[test]
    fn test_plain_value_wraps_into_single_element() {
        assert_eq!(
            normalize_image_field(Some("kemeja.jpg")),
            vec!["kemeja.jpg".to_string()]
        );
    }

    #[test]
    fn test_json_array_is_parsed() {
        assert_eq!(
            normalize_image_field(Some(r#"["a.jpg", "b.jpg"]"#)),
            vec!["a.jpg".to_string(), "b.jpg".to_string()]
        );
    }

    #[test]
    fn test_malformed_json_array_falls_back_to_raw_value() {
        let raw = r#"["a.jpg", broken]"#;
        assert_eq!(normalize_image_field(Some(raw)), vec![raw.to_string()]);
    }

    #[test]
    fn test_product_images_substitutes_placeholder() {
        assert_eq!(
            product_images(&product(None)),
            vec![PLACEHOLDER_IMAGE.to_string()]
        );
        assert_eq!(
            product_images(&product(Some("kemeja.jpg"))),
            vec!["kemeja.jpg".to_string()]
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let url = "https://cdn.example.com/a.jpg";
        assert_eq!(resolve_image_url("http://host/uploads", url, None), url);

        let data_uri = "data:image/png;base64,AAAA";
        assert_eq!(
            resolve_image_url("http://host/uploads", data_uri, Some("Toko")),
            data_uri
        );
    }

    #[test]
    fn test_seller_folder_path() {
        assert_eq!(
            resolve_image_url("http://host/uploads/", "a.jpg", Some("Toko Baju Keren")),
            "http://host/uploads/Toko_Baju_Keren/a.jpg"
        );
    }

    #[test]
    fn test_unusable_seller_name_falls_back_to_root() {
        for seller in [None, Some(""), Some("null"), Some("undefined"), Some("  ")] {
            assert_eq!(
                resolve_image_url("http://host/uploads", "a.jpg", seller),
                "http://host/uploads/a.jpg"
            );
        }
    }

    #[test]
    fn test_seller_folder_cleaning() {
        assert_eq!(clean_seller_folder("Toko  Baju!!"), "Toko_Baju");
        assert_eq!(clean_seller_folder("__Jaxel Store__"), "Jaxel_Store");
        assert_eq!(clean_seller_folder("a&b - c"), "a_b_-_c");
    }
}
