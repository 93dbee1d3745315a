#![cfg(test)]

mod mock_registrar;
