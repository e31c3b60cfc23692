mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

pub use create::CreateUserUseCase;
pub use delete::DeleteUserUseCase;
pub use find_all::FindUsersUseCase;
pub use find_by_id::FindUserByIdUseCase;
pub use update::UpdateUserUseCase;

use database::TransactionManager;
use std::sync::Arc;

use crate::repository::UserRepository;

/// Every user use-case wired to one repository.
pub struct UserUseCases<R> {
    pub create: CreateUserUseCase<R>,
    pub find_by_id: FindUserByIdUseCase<R>,
    pub find_all: FindUsersUseCase<R>,
    pub update: UpdateUserUseCase<R>,
    pub delete: DeleteUserUseCase<R>,
}

impl<R: UserRepository + 'static> UserUseCases<R> {
    pub fn new(repository: R, transactions: TransactionManager) -> Self {
        let repository = Arc::new(repository);

        Self {
            create: CreateUserUseCase::new(Arc::clone(&repository), transactions.clone()),
            find_by_id: FindUserByIdUseCase::new(Arc::clone(&repository)),
            find_all: FindUsersUseCase::new(Arc::clone(&repository)),
            update: UpdateUserUseCase::new(Arc::clone(&repository), transactions.clone()),
            delete: DeleteUserUseCase::new(repository, transactions),
        }
    }
}
