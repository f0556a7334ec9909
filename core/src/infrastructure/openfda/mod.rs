pub mod openfda_client;
