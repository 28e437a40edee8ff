// Storage Tests Module - Testing the storage module
// Tests organized by storage module functionality:
// - profile_tests: Profile, Photo, SelfProfile and ProfileDraft
// - thread_tests: Thread and Message structs (pending/matched, append)
// - app_state_tests: AppState list operations (events, requests, groups)
// - settings_tests: Settings defaults, validation and persistence

mod app_state_tests;
mod profile_tests;
mod settings_tests;
mod thread_tests;
