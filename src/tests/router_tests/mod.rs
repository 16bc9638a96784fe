mod home_tests;
mod predict_tests;
