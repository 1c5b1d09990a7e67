// display.rs - Row-wrapped text dump, for debugging

use std::fmt;

use crate::universe::Universe;

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell.state() as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::seed::Seed;
    use crate::universe::Universe;

    #[test]
    fn one_line_per_row() {
        let universe = Universe::with_seed(3, 2, &Seed::Cells(vec![(0, 1), (1, 2)])).unwrap();
        assert_eq!(universe.to_string(), "0 1 0 \n0 0 1 \n");
    }
}
