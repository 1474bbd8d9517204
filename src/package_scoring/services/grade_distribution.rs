use crate::package_scoring::domain::Grade;

/// Histogram of grades across a set of scored packages
///
/// Always carries all five grades in A..E order, including empty buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeDistribution {
    counts: [usize; 5],
}

impl GradeDistribution {
    pub fn from_grades<I: IntoIterator<Item = Grade>>(grades: I) -> Self {
        let mut counts = [0usize; 5];
        for grade in grades {
            counts[Self::index(grade)] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, grade: Grade) -> usize {
        self.counts[Self::index(grade)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(grade, count)` pairs in A..E order
    pub fn buckets(&self) -> Vec<(Grade, usize)> {
        Grade::ALL
            .iter()
            .map(|grade| (*grade, self.count(*grade)))
            .collect()
    }

    fn index(grade: Grade) -> usize {
        match grade {
            Grade::A => 0,
            Grade::B => 1,
            Grade::C => 2,
            Grade::D => 3,
            Grade::E => 4,
        }
    }
}
