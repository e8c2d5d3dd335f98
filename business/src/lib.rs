pub mod application {
    pub mod catalog {
        pub mod load;
    }
    pub mod checkout {
        pub mod submit;
    }
    pub mod order {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod payment {
        pub mod create_intent;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
    }
    pub mod catalog {
        pub mod browser;
        pub mod errors;
        pub mod filter;
        pub mod load;
        pub mod pagination;
        pub mod source;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod payment {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod create_intent;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod generator;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
mod test_support;
