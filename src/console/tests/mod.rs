//! Unit tests for the console front end.
