pub mod shared {
    pub mod infrastructure {
        pub mod deferred_runner;
    }
}

pub mod modules {
    pub mod onboarding {
        pub mod core {
            pub mod counter_store;
            pub mod status;
            pub mod view;
        }
        pub mod use_cases {
            pub mod record_onboarding_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_onboarding_status {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod eviction_scheduler;
            }
        }
    }
}

pub mod shell;
