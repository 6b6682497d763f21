pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod event_bus;
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod transformed_event;
        }
        pub mod use_cases {
            pub mod ingest_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod process_events {
                pub mod pool;
                pub mod worker;
            }
        }
    }
}

pub mod shell;
