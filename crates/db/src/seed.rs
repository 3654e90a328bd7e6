//! Sample catalog loaded at startup when `SEED_SAMPLE_CATALOG` is enabled.

use crate::memory::{Inventory, MemStore};
use crate::models::camera::CreateCamera;

/// The storefront's demo cameras, in display order.
pub fn sample_cameras() -> Vec<CreateCamera> {
    vec![
        CreateCamera {
            name: "Veo Sports Camera".into(),
            description: "Perfect for capturing sports events and action shots".into(),
            category: "Sports Camera".into(),
            price_per_day: 35.0,
            total_units: 8,
            available_units: 5,
            specifications: vec![
                "4K Video Recording".into(),
                "8-hour Battery Life".into(),
                "High-speed Capture (120fps)".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1593080358201-08e4ff5f93d9?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".into(),
        },
        CreateCamera {
            name: "Advanced Veo Sports Camera".into(),
            description: "Professional-grade sports camera with advanced features".into(),
            category: "Sports Camera".into(),
            price_per_day: 45.0,
            total_units: 5,
            available_units: 2,
            specifications: vec![
                "5K Video Recording".into(),
                "10-hour Battery Life".into(),
                "Ultra High-speed (240fps)".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1516724562728-afc824a36e84?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".into(),
        },
        CreateCamera {
            name: "Veo Pro Sports Camera".into(),
            description: "Top-of-the-line sports camera for professional use".into(),
            category: "Sports Camera".into(),
            price_per_day: 60.0,
            total_units: 3,
            available_units: 0,
            specifications: vec![
                "6K Video Recording".into(),
                "12-hour Battery Life".into(),
                "Professional Grade (360fps)".into(),
            ],
            image_url: "https://images.unsplash.com/photo-1613291261423-0e0097215311?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".into(),
        },
    ]
}

impl MemStore {
    /// A store pre-loaded with [`sample_cameras`] (ids 1..=3).
    pub fn with_sample_catalog() -> Self {
        let mut inventory = Inventory::default();
        for camera in sample_cameras() {
            inventory.insert_camera(camera);
        }
        Self::from_inventory(inventory)
    }
}
