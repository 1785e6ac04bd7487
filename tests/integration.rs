// Integration tests module

mod integration {
    mod alerts_test;
    mod recommendations_test;
    mod reports_test;
    mod series_test;
    mod session_test;
}
