pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod rbga_requests {
        pub mod core {
            pub mod attachment;
            pub mod constants;
            pub mod keys;
            pub mod localized_status;
            pub mod request;
            pub mod template;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_request {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_draft_request {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_workitem_details {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_workitem_attachments {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod describe_template {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod health_check {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod request_store;
                pub mod request_store_in_memory;
                pub mod sample_seed;
            }
        }
    }
}

pub mod client;

pub mod shell;
