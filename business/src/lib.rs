pub mod application {
    pub mod auth {
        pub mod authenticate;
    }
    pub mod configuration {
        pub mod describe;
    }
}

pub mod domain {
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod verifier;
        pub mod use_cases {
            pub mod authenticate;
        }
    }
    pub mod configuration {
        pub mod model;
        pub mod use_cases {
            pub mod describe;
        }
    }
    pub mod settings {
        pub mod errors;
        pub mod model;
        pub mod source;
        pub mod value_objects;
        pub mod variables;
    }
}
