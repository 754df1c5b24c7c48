use crate::core::{Comparator, ComparisonReport, ConfigProvider};

pub struct CompareEngine<C: Comparator, P: ConfigProvider> {
    comparator: C,
    config: P,
}

impl<C: Comparator, P: ConfigProvider> CompareEngine<C, P> {
    pub fn new(comparator: C, config: P) -> Self {
        Self { comparator, config }
    }

    pub fn run(&self) -> ComparisonReport {
        let left = self.config.left();
        let right = self.config.right();

        tracing::info!("Comparing strings with {:?} rules", self.comparator.design());
        tracing::debug!("Left input: {:?}", left);
        tracing::debug!("Right input: {:?}", right);

        let equivalent = self.comparator.compare(left, right);

        tracing::debug!("Comparison verdict: equivalent = {}", equivalent);

        ComparisonReport {
            design: self.comparator.design(),
            left: left.to_string(),
            right: right.to_string(),
            equivalent,
        }
    }
}
