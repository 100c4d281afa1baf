pub mod application {
    pub mod catalog {
        pub mod get_categories;
        pub mod get_product_page;
        pub mod get_products;
        pub mod get_sitemap;
        pub mod get_stats;
        pub mod product_page_loader;
    }
    pub mod order_intent {
        pub mod build_link;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod fetch;
        pub mod hierarchy;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_categories;
            pub mod get_product_page;
            pub mod get_products;
            pub mod get_sitemap;
            pub mod get_stats;
        }
    }
    pub mod pricing {
        pub mod engine;
        pub mod format;
    }
    pub mod projection {
        pub mod seo;
        pub mod site;
        pub mod sitemap;
        pub mod structured_data;
    }
    pub mod order_intent {
        pub mod link;
        pub mod use_cases {
            pub mod build_link;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod events;
        pub mod storage;
        pub mod store;
    }
}
