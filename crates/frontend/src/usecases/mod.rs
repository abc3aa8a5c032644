pub mod u001_browse_stores;
