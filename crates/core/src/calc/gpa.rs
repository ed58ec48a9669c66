use super::{parse_number, CalcError};

/// One course on a 4.0 grade-point scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub credits: f64,
    pub grade: f64,
}

impl Course {
    /// Parses raw credit and grade inputs. Either one failing to parse
    /// drops the course.
    pub fn parse(credits: &str, grade: &str) -> Option<Course> {
        Some(Course {
            credits: parse_number(credits)?,
            grade: parse_number(grade)?,
        })
    }

    /// Parses `CREDITS:GRADE`, e.g. `3:3.7`.
    pub fn parse_pair(pair: &str) -> Option<Course> {
        let (credits, grade) = pair.split_once(':')?;
        Course::parse(credits, grade)
    }
}

/// Credit-weighted grade point average.
pub fn calculate_gpa(courses: &[Course]) -> Result<f64, CalcError> {
    let (points, credits) = courses
        .iter()
        .fold((0.0, 0.0), |(points, credits), course| {
            (points + course.credits * course.grade, credits + course.credits)
        });

    if credits == 0.0 {
        return Err(CalcError::NoCourses);
    }

    Ok(points / credits)
}

/// Computes the GPA from raw `(credits, grade)` inputs, skipping rows that
/// do not parse.
pub fn evaluate<S: AsRef<str>>(rows: &[(S, S)]) -> String {
    let courses: Vec<Course> = rows
        .iter()
        .filter_map(|(credits, grade)| Course::parse(credits.as_ref(), grade.as_ref()))
        .collect();

    match calculate_gpa(&courses) {
        Ok(gpa) => format!("GPA: {:.2}", gpa),
        Err(err) => err.to_string(),
    }
}
