//! Tests for the Slack Web API client.

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod services_tests;

#[cfg(test)]
mod transport_tests;
