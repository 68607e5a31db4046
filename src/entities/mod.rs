//! Entity module - Contains all SeaORM entity definitions for the database.
//! Entry tables hold the eight ledger kinds; lookup tables hold the owner scopes,
//! categories and family register those entries refer to by id.

pub mod acquittance;
pub mod bill_voucher;
pub mod category;
pub mod church;
pub mod contra_entry;
pub mod custom_book;
pub mod custom_book_contra;
pub mod custom_book_credit;
pub mod custom_book_debit;
pub mod family;
pub mod other_credit;
pub mod pastorate;
pub mod receipt;

// Re-export specific types to avoid conflicts
pub use acquittance::{Entity as Acquittance, Model as AcquittanceModel};
pub use bill_voucher::{Entity as BillVoucher, Model as BillVoucherModel};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use church::{Column as ChurchColumn, Entity as Church, Model as ChurchModel};
pub use contra_entry::{Entity as ContraEntry, Model as ContraEntryModel};
pub use custom_book::{Column as CustomBookColumn, Entity as CustomBook, Model as CustomBookModel};
pub use custom_book_contra::{Entity as CustomBookContra, Model as CustomBookContraModel};
pub use custom_book_credit::{Entity as CustomBookCredit, Model as CustomBookCreditModel};
pub use custom_book_debit::{Entity as CustomBookDebit, Model as CustomBookDebitModel};
pub use family::{Column as FamilyColumn, Entity as Family, Model as FamilyModel};
pub use other_credit::{Entity as OtherCredit, Model as OtherCreditModel};
pub use pastorate::{Column as PastorateColumn, Entity as Pastorate, Model as PastorateModel};
pub use receipt::{Entity as Receipt, Model as ReceiptModel};
