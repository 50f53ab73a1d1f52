pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod employee_store;
        pub mod leave_request_store;
        pub mod timesheet_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod break_interval;
            pub mod employee;
            pub mod entry;
            pub mod errors;
            pub mod leave_request;
            pub mod timesheet;
        }
        pub mod use_cases {
            pub mod outcome;
            pub mod punch;
            pub mod clock_in {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clock_out {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod start_break {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_break {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod review_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
