//! The image sub-projection.

/// Full image projection: dereferences the asset and surfaces the URL,
/// descriptive text, mime type, and pixel dimensions.
pub const IMAGE_FIELDS: &str = r#"_type,
  asset->{
    "_ref": _id,
    _type,
    url,
    altText,
    description,
    title,
    originalFilename,
    mimeType,
    "width": metadata.dimensions.width,
    "height": metadata.dimensions.height
  }"#;
