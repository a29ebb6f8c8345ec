use crate::ports::CommandHandler;
use async_trait::async_trait;
use dnsrpc_domain::{CommandRequest, DomainError, Grid};

pub const NO_SOLUTION: &str = "No solution exists";

/// `{row}.{row}...{row}.sudoku`: nine rows of nine digits, `0` for blanks.
pub struct SudokuCommand;

#[async_trait]
impl CommandHandler for SudokuCommand {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        let mut grid = Grid::parse(&request.argument)?;

        // Exhaustive search on unsatisfiable grids; keep it off the reactor.
        let solved = tokio::task::spawn_blocking(move || grid.solve().then_some(grid))
            .await
            .map_err(|e| DomainError::Internal(format!("Solver task failed: {}", e)))?;

        Ok(vec![match solved {
            Some(grid) => grid.to_string(),
            None => NO_SOLUTION.to_string(),
        }])
    }
}
