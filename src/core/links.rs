use crate::models::Restaurant;

/// Suffix every base image reference carries
pub const IMAGE_SUFFIX: &str = ".jpg";

/// URL of the detail view for a restaurant
pub fn url_for_restaurant(restaurant: &Restaurant) -> String {
    format!("./restaurant.html?id={}", restaurant.id)
}

/// Base image URL: `<base_path><photograph>`
pub fn image_url_for_restaurant(base_path: &str, restaurant: &Restaurant) -> String {
    format!("{}{}", base_path, restaurant.photograph())
}

/// Responsive size variants of one base image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariants {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl ImageVariants {
    /// Derive variants by replacing the `.jpg` suffix with `-small.jpg`,
    /// `-medium.jpg` and `-large.jpg`
    ///
    /// A reference without the suffix gets the size tag appended as is.
    pub fn from_base(base: &str) -> Self {
        let stem = base.strip_suffix(IMAGE_SUFFIX).unwrap_or(base);
        Self {
            small: format!("{}-small{}", stem, IMAGE_SUFFIX),
            medium: format!("{}-medium{}", stem, IMAGE_SUFFIX),
            large: format!("{}-large{}", stem, IMAGE_SUFFIX),
        }
    }

    /// `srcset` attribute value: large at 2x, medium at 1x, small at 100w
    pub fn srcset(&self) -> String {
        format!("{} 2x, {} 1x, {} 100w", self.large, self.medium, self.small)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_from_base() {
        let variants = ImageVariants::from_base("/img/1.jpg");
        assert_eq!(variants.small, "/img/1-small.jpg");
        assert_eq!(variants.medium, "/img/1-medium.jpg");
        assert_eq!(variants.large, "/img/1-large.jpg");
    }

    #[test]
    fn test_srcset() {
        let variants = ImageVariants::from_base("/img/2.jpg");
        assert_eq!(
            variants.srcset(),
            "/img/2-large.jpg 2x, /img/2-medium.jpg 1x, /img/2-small.jpg 100w"
        );
    }

    #[test]
    fn test_base_without_suffix() {
        let variants = ImageVariants::from_base("/img/3");
        assert_eq!(variants.small, "/img/3-small.jpg");
    }
}
