pub mod car_match;
