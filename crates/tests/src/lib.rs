#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod session_tests;
