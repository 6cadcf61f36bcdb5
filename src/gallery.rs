//! Photo gallery data and layout.

/// An externally hosted photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub caption: &'static str,
}

/// Number of columns the gallery is laid out in.
pub const GALLERY_COLUMNS: usize = 2;

/// The apartment photos, in display order.
pub const GALLERY_IMAGES: [GalleryImage; 4] = [
    GalleryImage {
        url: "https://via.placeholder.com/400x300.png?text=Living+Room",
        caption: "Living Room",
    },
    GalleryImage {
        url: "https://via.placeholder.com/400x300.png?text=Kitchen",
        caption: "Kitchen",
    },
    GalleryImage {
        url: "https://via.placeholder.com/400x300.png?text=Bedroom",
        caption: "Bedroom",
    },
    GalleryImage {
        url: "https://via.placeholder.com/400x300.png?text=Bathroom",
        caption: "Bathroom",
    },
];

/// Distribute `images` over `columns` columns, row by row.
///
/// Image `i` lands in column `i % columns`, so with two columns the first
/// column holds images 0, 2, ... and the second 1, 3, ...
pub fn layout_columns(images: &[GalleryImage], columns: usize) -> Vec<Vec<GalleryImage>> {
    let mut layout = vec![Vec::new(); columns];
    if columns == 0 {
        return layout;
    }

    for (index, image) in images.iter().enumerate() {
        layout[index % columns].push(*image);
    }

    layout
}

/// The gallery as shown on the site.
pub fn columns() -> Vec<Vec<GalleryImage>> {
    layout_columns(&GALLERY_IMAGES, GALLERY_COLUMNS)
}
