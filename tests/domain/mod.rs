mod job_id_test;
mod job_status_test;
mod job_test;
