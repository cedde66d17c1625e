#![allow(dead_code)]

pub use inner::*;

#[cfg(feature = "metrics")]
mod inner {
    #[derive(Debug, Default)]
    pub struct Metrics {
        name: &'static str,
        number_of_face_multisets: usize,
        number_of_sum_combinations: usize,
        number_of_trials: usize,
    }

    impl Metrics {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                ..Default::default()
            }
        }

        pub fn inc_face_multisets(&mut self) {
            self.number_of_face_multisets += 1;
        }

        pub fn inc_sum_combinations(&mut self) {
            self.number_of_sum_combinations += 1;
        }

        pub fn inc_trials(&mut self) {
            self.number_of_trials += 1;
        }

        pub fn print_report(&self) {
            eprintln!("{:#?}", self);
        }
    }
}

#[cfg(not(feature = "metrics"))]
mod inner {
    #[derive(Debug, Default)]
    pub struct Metrics;

    impl Metrics {
        pub fn new(_name: &'static str) -> Self {
            Self
        }

        pub fn inc_face_multisets(&mut self) {}

        pub fn inc_sum_combinations(&mut self) {}

        pub fn inc_trials(&mut self) {}

        pub fn print_report(&self) {}
    }
}
